error_chain! {
    foreign_links {
        Io(::std::io::Error);
    }

    errors {
        IndexError(s: &'static str) {
            description("Index error")
            display("Index error: {}", s)
        }
        InputError(s: String) {
            description("Input error")
            display("Input error: {}", s)
        }
    }
}
