use std::process::ExitCode;

fn main() -> ExitCode {
    espcheck::entry::run()
}
