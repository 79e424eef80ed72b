#[cfg(test)]
mod tests {
    use std::fs;

    use clap::Parser;
    use postinstall_cli::cli_args::Args;
    use postinstall_cli::output::emit_commands;
    use postinstall_core::error::Error;
    use tempfile::tempdir;

    const SHELL: &str = "sh";

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec!["postinstall", "--shell", SHELL];
        argv.extend_from_slice(extra);
        Args::parse_from(argv)
    }

    fn commands(lines: &[&str]) -> Vec<String> {
        lines.iter().map(|line| line.to_string()).collect()
    }

    #[test]
    fn test_print_mode_writes_script_to_output() {
        let mut out = Vec::new();
        emit_commands(&mut out, &args(&[]), &commands(&["echo a", "echo b"])).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "# Generated script\necho a\necho b\n"
        );
    }

    #[test]
    fn test_write_mode_saves_script() {
        let dir = tempdir().unwrap();
        let script = dir.path().join("install.sh");
        let script_arg = script.to_str().unwrap();

        let mut out = Vec::new();
        emit_commands(&mut out, &args(&["-w", script_arg]), &commands(&["echo a"])).unwrap();

        let output = String::from_utf8(out).unwrap();
        assert_eq!(output, format!("# Script saved to {script_arg}\n"));
        assert_eq!(
            fs::read_to_string(&script).unwrap(),
            "# Generated script\necho a\n"
        );
    }

    #[test]
    fn test_write_and_exec_runs_script() {
        let dir = tempdir().unwrap();
        let script = dir.path().join("install.sh");
        let marker = dir.path().join("marker");

        let mut out = Vec::new();
        emit_commands(
            &mut out,
            &args(&["-w", script.to_str().unwrap(), "-e"]),
            &commands(&[&format!("touch {}", marker.display())]),
        )
        .unwrap();

        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("# Script saved to"));
        assert!(output.contains("Executing script...\n"));
        assert!(output.ends_with("Execution finished with code 0\n"));
        assert!(marker.exists());
    }

    #[test]
    fn test_write_and_exec_reports_code_then_fails() {
        let dir = tempdir().unwrap();
        let script = dir.path().join("install.sh");

        let mut out = Vec::new();
        let result = emit_commands(
            &mut out,
            &args(&["-w", script.to_str().unwrap(), "-e"]),
            &commands(&["exit 4"]),
        );

        match result {
            Err(Error::CommandFailed { command, code }) => {
                assert_eq!(command, script.display().to_string());
                assert_eq!(code, Some(4));
            }
            other => panic!("Expected a command failure, got {other:?}"),
        }
        let output = String::from_utf8(out).unwrap();
        assert!(output.ends_with("Execution finished with code 4\n"));
    }

    #[test]
    fn test_direct_exec_stops_at_first_failure() {
        let dir = tempdir().unwrap();
        let before = dir.path().join("before");
        let after = dir.path().join("after");

        let mut out = Vec::new();
        let result = emit_commands(
            &mut out,
            &args(&["-e"]),
            &commands(&[
                &format!("touch {}", before.display()),
                "exit 2",
                &format!("touch {}", after.display()),
            ]),
        );

        match result {
            Err(error @ Error::CommandFailed { .. }) => {
                assert_eq!(error.to_string(), "Command failed: exit 2 (exit code 2)");
            }
            other => panic!("Expected a command failure, got {other:?}"),
        }
        assert_eq!(String::from_utf8(out).unwrap(), "Executing directly...\n");
        assert!(before.exists());
        assert!(!after.exists());
    }
}
