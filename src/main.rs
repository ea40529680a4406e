use std::io::{self, Write};
use std::process::ExitCode;

use log::error;
use nextline::LineReader;
use nextline::reader::{RawSource, ReaderSource, SourceId};

fn print_lines<S: RawSource>(
    reader: &mut LineReader,
    id: SourceId,
    mut source: S,
    out: &mut impl Write,
) -> Result<(), Box<dyn std::error::Error>> {
    while let Some(line) = reader.read_next_line(id, &mut source)? {
        out.write_all(&line)?;
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    let paths: Vec<String> = std::env::args().skip(1).collect();
    let mut reader = LineReader::new();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let result = if paths.is_empty() {
        print_lines(&mut reader, 0, ReaderSource::stdin(), &mut out)
    } else {
        paths.iter().try_for_each(|path| {
            let source = ReaderSource::from_file(path)?;
            print_lines(&mut reader, 0, source, &mut out)
        })
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}
