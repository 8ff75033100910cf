use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::io::Read;
use std::process::{Command, Output, Stdio};
use tempfile::NamedTempFile;

#[macro_use]
extern crate lazy_static;

#[cfg(test)]
mod tests {
    use super::*;

    static HEADER: &str = "INSERT INTO colaboradores (solicitud_id, cedula, nombre, foto, documento_arl, estado) VALUES";
    static FOTO: &str = "'https://gestion-contratistas-os.nyc3.digitaloceanspaces.com/images/vehiculos/2b7be9a2-30f7-41ad-84a9-79ecc2671674.webp'";
    static DOC: &str = "'https://gestion-contratistas-os.nyc3.digitaloceanspaces.com/images/vehiculos/37dd94a6-d2b4-4e3c-9317-0cfe6737afb5.pdf'";

    lazy_static! {
        static ref FIRST_TUPLE: String = format!("(1, '123123', 'Juan Pérez', {}, {}, 1),", FOTO, DOC);
        static ref LAST_TUPLE: String = format!("(1, '123222', 'Elisa Durán', {}, {}, 1);", FOTO, DOC);
    }

    fn run_gen(args: &[&str]) -> Result<Output, Box<dyn std::error::Error>> {
        let mut cmd: Command = Command::cargo_bin("gen_colaboradores")?;
        cmd.args(args).stdin(Stdio::null()).stdout(Stdio::piped()).stderr(Stdio::piped());
        let output = cmd.output()?;
        println!("stderr: {}<<END", String::from_utf8_lossy(&output.stderr));
        Ok(output)
    }

    fn check_statement(stmt: &str) {
        assert!(predicate::str::starts_with(HEADER).eval(stmt), "missing header");
        assert!(predicate::str::ends_with(";\n").eval(stmt), "missing terminator");
        assert!(!predicate::str::contains(",;").eval(stmt), "trailing comma before ;");

        let lines: Vec<&str> = stmt.lines().collect();
        assert_eq!(lines.len(), 101);
        assert_eq!(lines[0], HEADER);
        assert_eq!(lines[1], FIRST_TUPLE.as_str());
        assert_eq!(lines[100], LAST_TUPLE.as_str());

        for (i, l) in lines[1..].iter().enumerate() {
            let cedula = format!("(1, '{}', '", 123123 + i);
            assert!(l.starts_with(&cedula), "line {} expected cedula prefix {} got {}", i, cedula, l);
            let tail = format!(", {}, {}, 1", FOTO, DOC);
            assert!(l.contains(&tail), "line {} has different fixed literals: {}", i, l);
        }
    }

    #[test]
    fn writes_statement_to_stdout() -> Result<(), Box<dyn std::error::Error>> {
        let output = run_gen(&[])?;
        assert!(output.status.success());
        check_statement(&String::from_utf8(output.stdout)?);
        Ok(())
    }

    #[test]
    fn escape_quotes_leaves_default_names_alone() -> Result<(), Box<dyn std::error::Error>> {
        let plain = run_gen(&[])?;
        let escaped = run_gen(&["--escape_quotes"])?;
        assert!(escaped.status.success());
        assert_eq!(plain.stdout, escaped.stdout);
        Ok(())
    }

    #[test]
    fn writes_statement_to_file() -> Result<(), Box<dyn std::error::Error>> {
        let file = NamedTempFile::new()?;
        let path = file.path().to_string_lossy().to_string();
        let output = run_gen(&["-o", &path, "--stats"])?;
        assert!(output.status.success());
        assert!(output.stdout.is_empty(), "stdout should be empty when -o is used");

        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(predicate::str::contains("records: 100").eval(&stderr));

        let mut stmt = String::new();
        file.reopen()?.read_to_string(&mut stmt)?;
        check_statement(&stmt);
        assert!(stderr.contains(&format!("bytes: {}", stmt.len())));
        Ok(())
    }

    #[test]
    fn output_into_missing_directory_fails() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("missing").join("seed.sql");
        let output = run_gen(&["-o", &path.to_string_lossy()])?;
        assert_eq!(output.status.code(), Some(1));
        assert!(String::from_utf8_lossy(&output.stderr).starts_with("error: "));
        Ok(())
    }

    #[test]
    fn print_examples_exits_clean() -> Result<(), Box<dyn std::error::Error>> {
        let output = run_gen(&["-E"])?;
        assert!(output.status.success());
        assert!(predicate::str::contains("gen_colaboradores -o").eval(&String::from_utf8_lossy(&output.stdout)));
        Ok(())
    }

    #[test]
    fn verbose_keeps_stdout_clean() -> Result<(), Box<dyn std::error::Error>> {
        let output = run_gen(&["-vv"])?;
        assert!(output.status.success());
        assert!(String::from_utf8_lossy(&output.stderr).contains("CLI options"));
        check_statement(&String::from_utf8(output.stdout)?);
        Ok(())
    }
}
