use std::process::ExitCode;

fn main() -> ExitCode {
    taxograph::cli::main()
}
