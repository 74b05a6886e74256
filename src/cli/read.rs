use std::{fs::File, io::BufReader, path::Path};

use marten_sat::{
    builder::ParserInfo,
    context::Context,
    types::err::{ErrorKind, ParseError},
};

/// Reads the DIMACS formula at `path` into the context, decompressing if the file has an `xz` extension.
pub fn read_formula(ctx: &mut Context, path: &Path) -> Result<ParserInfo, ErrorKind> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) => return Err(ErrorKind::from(ParseError::Io(e.to_string()))),
    };

    match path.extension() {
        Some(extension) if extension == "xz" => read_xz(ctx, file),
        _ => ctx.read_dimacs(BufReader::new(file)),
    }
}

#[cfg(feature = "xz")]
fn read_xz(ctx: &mut Context, file: File) -> Result<ParserInfo, ErrorKind> {
    ctx.read_dimacs(BufReader::new(xz2::read::XzDecoder::new(file)))
}

#[cfg(not(feature = "xz"))]
fn read_xz(_ctx: &mut Context, _file: File) -> Result<ParserInfo, ErrorKind> {
    Err(ErrorKind::from(ParseError::Io(
        "reading xz files requires the xz feature".to_string(),
    )))
}
