use std::process::ExitCode;

fn main() -> ExitCode {
    custform_cli::run()
}
