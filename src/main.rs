use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(err) = divline::run() {
        eprintln!("error: {err:#}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
