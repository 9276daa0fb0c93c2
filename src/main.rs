use lamina_mock::{cli, ExecConfig};
use std::ffi::OsString;
use std::io;

fn main() {
    let args: Vec<OsString> = std::env::args_os().collect();

    let stdout = io::stdout();
    let mut stderr = io::stderr();

    let code = cli::run(&args, ExecConfig::from_env, stdout.lock(), &mut stderr);
    std::process::exit(code);
}
