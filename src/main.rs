use std::process::ExitCode;

fn main() -> ExitCode {
    boxart::runtime::run()
}
