use crate::config::ExecConfig;
use crate::error::{MockError, MockResult};
use crate::executor::{run_script, Transcript};
use std::ffi::OsString;
use std::io::Write;
use std::path::PathBuf;

/// Expect exactly one script path after the program name.
///
/// Arguments are taken as `OsString` so a path that is not valid UTF-8
/// still reaches the file check instead of aborting the process.
pub fn parse_args(args: &[OsString]) -> MockResult<PathBuf> {
    match args {
        [_, path] => Ok(PathBuf::from(path)),
        _ => Err(MockError::Usage),
    }
}

/// Run the whole command and return the process exit status.
///
/// `load_config` is only called once the arguments are valid, so a usage
/// error never touches the filesystem.
pub fn run<O, E, F>(args: &[OsString], load_config: F, out: O, err: &mut E) -> i32
where
    O: Write,
    E: Write,
    F: FnOnce() -> MockResult<ExecConfig>,
{
    match try_run(args, load_config, out) {
        Ok(()) => 0,
        Err(e) => {
            tracing::error!("{}", e);
            let _ = writeln!(err, "{}", e);
            let _ = err.flush();
            e.exit_code()
        }
    }
}

fn try_run<O, F>(args: &[OsString], load_config: F, out: O) -> MockResult<()>
where
    O: Write,
    F: FnOnce() -> MockResult<ExecConfig>,
{
    let path = parse_args(args)?;
    let config = load_config()?;

    if crate::logging::init(&config) {
        tracing::info!("=== MOCK INTERPRETER STARTED ===");
        tracing::info!("Args: {:?}", args);
    }

    let mut transcript = Transcript::new(out);
    run_script(&path, &config, &mut transcript)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<OsString> {
        list.iter().map(OsString::from).collect()
    }

    #[test]
    fn exactly_one_argument() {
        assert!(parse_args(&args(&["lamina-mock"])).is_err());
        assert!(parse_args(&args(&["lamina-mock", "a.lm", "b.lm"])).is_err());
        assert_eq!(
            parse_args(&args(&["lamina-mock", "a.lm"])).unwrap(),
            PathBuf::from("a.lm")
        );
    }

    #[test]
    fn usage_error_skips_config_and_output() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = run(
            &args(&["lamina-mock"]),
            || panic!("config must not be loaded on usage error"),
            &mut out,
            &mut err,
        );

        assert_eq!(code, 1);
        assert!(out.is_empty());
        assert_eq!(
            String::from_utf8(err).unwrap(),
            "Usage: lamina-mock <script.lm>\n"
        );
    }

    #[test]
    fn missing_file_reports_on_stderr() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = run(
            &args(&["lamina-mock", "nowhere_to_be_found.lm"]),
            || Ok(ExecConfig::instant()),
            &mut out,
            &mut err,
        );

        assert_eq!(code, 1);
        assert_eq!(
            String::from_utf8(err).unwrap(),
            "Error: File 'nowhere_to_be_found.lm' not found!\n"
        );
        let out = String::from_utf8(out).unwrap();
        assert!(out.starts_with("Lamina Mock Interpreter v1.0\n"));
        assert!(!out.contains("completed successfully"));
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_path_is_reported_not_panicked() {
        use std::os::unix::ffi::OsStringExt;

        let bad = OsString::from_vec(b"bad\xff.lm".to_vec());
        assert_eq!(
            parse_args(&[OsString::from("lamina-mock"), bad.clone()]).unwrap(),
            PathBuf::from(&bad)
        );

        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = run(
            &[OsString::from("lamina-mock"), bad],
            || Ok(ExecConfig::instant()),
            &mut out,
            &mut err,
        );

        assert_eq!(code, 1);
        let err = String::from_utf8_lossy(&err);
        assert!(err.starts_with("Error: File 'bad"));
        assert!(err.trim_end().ends_with(".lm' not found!"));
    }

    #[test]
    fn config_error_exits_one() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = run(
            &args(&["lamina-mock", "script.lm"]),
            || {
                Err(MockError::Config {
                    path: PathBuf::from("bad.json"),
                    reason: "expected value".to_string(),
                })
            },
            &mut out,
            &mut err,
        );

        assert_eq!(code, 1);
        assert!(out.is_empty());
        assert!(String::from_utf8(err)
            .unwrap()
            .starts_with("Error: invalid configuration 'bad.json'"));
    }
}
