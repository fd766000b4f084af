// src/csv.rs
use std::io::{self, Write};

use crate::session::{COLUMNS, Session};

fn needs_quotes(field: &str) -> bool {
    field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV row (minimal quoting, CRLF terminated).
pub fn write_row<W: Write, S: AsRef<str>>(mut w: W, row: &[S]) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        let cell = cell.as_ref();
        if !first { write!(w, ",")?; } else { first = false; }
        if needs_quotes(cell) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    write!(w, "\r\n")
}

/// Header plus one row per session.
pub fn write_sessions<W: Write>(mut w: W, sessions: &[Session]) -> io::Result<()> {
    write_row(&mut w, &COLUMNS[..])?;
    for s in sessions {
        write_row(&mut w, &s.to_row()[..])?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_string(row: &[&str]) -> String {
        let mut buf = Vec::new();
        write_row(&mut buf, row).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn plain_cells_unquoted() {
        assert_eq!(row_string(&["a", "b c", ""]), "a,b c,\r\n");
    }

    #[test]
    fn quotes_only_when_needed() {
        assert_eq!(row_string(&["x,y"]), "\"x,y\"\r\n");
        assert_eq!(row_string(&["say \"hi\""]), "\"say \"\"hi\"\"\"\r\n");
        assert_eq!(row_string(&["one\n\ntwo", "z"]), "\"one\n\ntwo\",z\r\n");
    }

    #[test]
    fn empty_list_writes_header_only() {
        let mut buf = Vec::new();
        write_sessions(&mut buf, &[]).unwrap();
        let s = String::from_utf8(buf).unwrap();
        assert_eq!(
            s,
            "event_id,type,date,time_start,time_end,room,title,speakers,description,event_url,length_in_hours\r\n"
        );
    }
}
