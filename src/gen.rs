use std::io::Write;

use itertools::Itertools;

use crate::nombres;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

pub const HEADER: &str = "INSERT INTO colaboradores (solicitud_id, cedula, nombre, foto, documento_arl, estado) VALUES";

/// How names are placed between the single quotes of their SQL string literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameQuoting {
	/// copied as-is, a `'` inside a name ends the literal early
	Verbatim,
	/// embedded `'` doubled to `''`
	Escaped,
}

/// Literals shared by every record of one INSERT.
///
/// `foto` and `documento_arl` are SQL literals, quotes included, and are
/// never touched by the generator.
#[derive(Debug, Clone)]
pub struct BatchParams<'a> {
	pub solicitud_id: u64,
	pub cedula_inicial: u64,
	pub foto: &'a str,
	pub documento_arl: &'a str,
	pub estado: u32,
}

impl BatchParams<'static> {
	pub fn default_batch() -> BatchParams<'static> {
		BatchParams {
			solicitud_id: nombres::SOLICITUD_ID,
			cedula_inicial: nombres::CEDULA_INICIAL,
			foto: nombres::FOTO,
			documento_arl: nombres::DOCUMENTO_ARL,
			estado: nombres::ESTADO,
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollaboratorRecord<'a> {
	pub solicitud_id: u64,
	pub cedula: u64,
	pub nombre: &'a str,
	pub foto: &'a str,
	pub documento_arl: &'a str,
	pub estado: u32,
}

impl<'a> CollaboratorRecord<'a> {
	pub fn to_sql_tuple(&self, quoting: NameQuoting) -> String {
		let nombre = match quoting {
			NameQuoting::Verbatim => self.nombre.to_string(),
			NameQuoting::Escaped => escape_sql_str(self.nombre),
		};
		format!("({}, '{}', '{}', {}, {}, {})",
			self.solicitud_id, self.cedula, nombre, self.foto, self.documento_arl, self.estado)
	}
}

pub fn escape_sql_str(s: &str) -> String {
	s.replace('\'', "''")
}

/// One record per name, in list order, with `cedula = cedula_inicial + index`.
pub fn records<'a, S>(names: &'a [S], params: &BatchParams<'a>) -> Result<Vec<CollaboratorRecord<'a>>>
	where S: AsRef<str>
{
	if names.is_empty() {
		Err("name list is empty - nothing to insert")?
	}
	let mut recs = Vec::with_capacity(names.len());
	for (i, nombre) in names.iter().enumerate() {
		let cedula = match params.cedula_inicial.checked_add(i as u64) {
			Some(c) => c,
			None => Err(format!("cedula overflow at position {} starting from {}", i, params.cedula_inicial))?,
		};
		recs.push(CollaboratorRecord {
			solicitud_id: params.solicitud_id,
			cedula,
			nombre: nombre.as_ref(),
			foto: params.foto,
			documento_arl: params.documento_arl,
			estado: params.estado,
		});
	}
	Ok(recs)
}

pub fn value_tuples<S: AsRef<str>>(names: &[S], params: &BatchParams, quoting: NameQuoting) -> Result<Vec<String>> {
	Ok(records(names, params)?
		.iter()
		.map(|r| r.to_sql_tuple(quoting))
		.collect())
}

pub fn insert_statement<S: AsRef<str>>(names: &[S], params: &BatchParams, quoting: NameQuoting) -> Result<String> {
	let body = value_tuples(names, params, quoting)?.iter().join(",\n");
	let mut stmt = String::with_capacity(HEADER.len() + body.len() + 3);
	stmt.push_str(HEADER);
	stmt.push('\n');
	stmt.push_str(&body);
	stmt.push_str(";\n");
	Ok(stmt)
}

/// Write the whole statement in one go, returns the number of bytes written.
pub fn write_insert<W, S>(writer: &mut W, names: &[S], params: &BatchParams, quoting: NameQuoting) -> Result<usize>
	where W: Write + ?Sized, S: AsRef<str>
{
	let stmt = insert_statement(names, params, quoting)?;
	writer.write_all(stmt.as_bytes())?;
	Ok(stmt.len())
}

#[cfg(test)]
fn two_names_params() -> BatchParams<'static> {
	BatchParams {
		solicitud_id: 1,
		cedula_inicial: 123123,
		foto: "'F'",
		documento_arl: "'D'",
		estado: 1,
	}
}

#[test]
fn test_two_name_statement() {
	let names = ["Juan Pérez", "María Gómez"];
	let stmt = insert_statement(&names, &two_names_params(), NameQuoting::Verbatim).unwrap();
	let expected = format!("{}\n{}\n{}\n", HEADER,
		"(1, '123123', 'Juan Pérez', 'F', 'D', 1),",
		"(1, '123124', 'María Gómez', 'F', 'D', 1);");
	assert_eq!(stmt, expected, "two name insert cmp failed");
}

#[test]
fn test_default_batch_cedulas() {
	let params = BatchParams::default_batch();
	let recs = records(&nombres::NOMBRES, &params).unwrap();
	assert_eq!(recs.len(), 100);
	assert_eq!(recs[0].cedula, 123123);
	assert_eq!(recs[99].cedula, 123222);
	for (i, r) in recs.iter().enumerate() {
		assert_eq!(r.cedula, params.cedula_inicial + i as u64);
		assert_eq!(r.nombre, nombres::NOMBRES[i]);
		assert_eq!(r.solicitud_id, 1);
		assert_eq!(r.foto, nombres::FOTO);
		assert_eq!(r.documento_arl, nombres::DOCUMENTO_ARL);
		assert_eq!(r.estado, 1);
	}
}

#[test]
fn test_default_batch_statement_shape() {
	let stmt = insert_statement(&nombres::NOMBRES, &BatchParams::default_batch(), NameQuoting::Verbatim).unwrap();
	assert!(stmt.starts_with(HEADER));
	assert!(stmt.ends_with(");\n"));
	assert!(!stmt.contains(",;"));
	let lines: Vec<&str> = stmt.lines().collect();
	assert_eq!(lines.len(), 101);
	assert!(lines[1].starts_with("(1, '123123', 'Juan Pérez', 'https://"));
	assert!(lines[100].starts_with("(1, '123222', 'Elisa Durán', "));
	for l in &lines[1..100] {
		assert!(l.ends_with(", 1),"), "tuple line not comma terminated: {}", l);
	}
}

#[test]
fn test_quoting_modes() {
	let names = ["Ana O'Neil"];
	let params = two_names_params();
	let verbatim = value_tuples(&names, &params, NameQuoting::Verbatim).unwrap();
	assert_eq!(verbatim, vec!["(1, '123123', 'Ana O'Neil', 'F', 'D', 1)".to_string()]);
	let escaped = value_tuples(&names, &params, NameQuoting::Escaped).unwrap();
	assert_eq!(escaped, vec!["(1, '123123', 'Ana O''Neil', 'F', 'D', 1)".to_string()]);
}

#[test]
fn test_empty_names_rejected() {
	let names: [&str; 0] = [];
	assert!(insert_statement(&names, &two_names_params(), NameQuoting::Verbatim).is_err());
}

#[test]
fn test_cedula_overflow() {
	let mut params = two_names_params();
	params.cedula_inicial = u64::MAX;
	assert!(records(&["a"], &params).is_ok());
	assert!(records(&["a", "b"], &params).is_err());
}

#[test]
fn test_write_insert_counts_bytes() -> std::result::Result<(), Box<dyn std::error::Error>> {
	let mut buf: Vec<u8> = Vec::new();
	let names = vec!["Juan Pérez".to_string()];
	let n = write_insert(&mut buf, &names, &two_names_params(), NameQuoting::Verbatim)?;
	assert_eq!(n, buf.len());
	assert_eq!(String::from_utf8(buf)?, format!("{}\n(1, '123123', 'Juan Pérez', 'F', 'D', 1);\n", HEADER));
	Ok(())
}
