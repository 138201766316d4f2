use std::process::ExitCode;

fn main() -> ExitCode {
    printadvisor_cli::run()
}
