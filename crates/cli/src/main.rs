use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> ExitCode {
    stagebill_observability::init();

    let mut args = std::env::args_os().skip(1);
    let (Some(plays), Some(invoice)) = (args.next(), args.next()) else {
        eprintln!("usage: stagebill <plays.json> <invoice.json>");
        return ExitCode::from(2);
    };

    match stagebill_cli::run(&PathBuf::from(plays), &PathBuf::from(invoice)) {
        Ok(text) => {
            print!("{text}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(error = %format!("{err:#}"), "statement generation failed");
            ExitCode::FAILURE
        }
    }
}
