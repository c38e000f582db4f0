use crate::atom::AtomRecord;
use crate::element;
use crate::geometry::Geometry;
use log::warn;

/// How the leading label field of a formatted row is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelMode {
    /// Element symbol, e.g. "Cl".
    Symbol,
    /// Atomic number via the element table; unknown symbols print 0.
    AtomicNumber,
}

/// Output of [`format`], keeping the header flag and atom count alongside
/// the rendered text.
#[derive(Debug, Clone, PartialEq)]
pub struct FormattedGeometry {
    pub text: String,
    pub had_header: bool,
    pub count: usize,
}

/// Parses XYZ-like text into a [`Geometry`].
///
/// Tolerates a missing count/comment header: if the first line is not an
/// atom count (or the file is too short for the count it declares), it is
/// treated as the first coordinate line. Lines that do not look like an
/// atom are dropped. When no atom at all is recognized the original input
/// is returned verbatim as [`Geometry::Unparsed`].
///
/// This function is total: it never fails, whatever the input.
pub fn parse(text: &str) -> Geometry {
    let lines: Vec<&str> = text.trim().lines().collect();

    let mut start = 0;
    let mut had_header = false;
    if let Some(first) = lines.first() {
        if let Ok(declared) = first.trim().parse::<usize>() {
            if lines.len() >= declared.saturating_add(2) {
                // lines[0] is the atom count, lines[1] the comment
                start = 2;
                had_header = true;
            }
        }
    }

    let mut atoms: Vec<AtomRecord> = vec![];
    for line in &lines[start..] {
        match parse_atom_line(line, atoms.len() + 1) {
            Some(atom) => atoms.push(atom),
            None => {
                if !line.trim().is_empty() {
                    warn!("dropping malformed coordinate line: {line:?}");
                }
            }
        }
    }

    if atoms.is_empty() {
        return Geometry::Unparsed {
            raw: text.to_string(),
        };
    }
    Geometry::Parsed { atoms, had_header }
}

/// A line is an atom iff it has a symbol token followed by three finite
/// coordinates. Extra tokens (extended-XYZ columns) are ignored.
fn parse_atom_line(line: &str, index: usize) -> Option<AtomRecord> {
    let mut tokens = line.split_whitespace();
    let symbol = tokens.next()?;
    let x: f64 = tokens.next()?.parse().ok()?;
    let y: f64 = tokens.next()?.parse().ok()?;
    let z: f64 = tokens.next()?.parse().ok()?;
    if !x.is_finite() || !y.is_finite() || !z.is_finite() {
        return None;
    }
    Some(AtomRecord::new(index, symbol.to_string(), x, y, z))
}

/// Renders a geometry as fixed-column text: a 2-column left-justified label
/// followed by three 12-column right-justified coordinates with `decimals`
/// fractional digits. The padding is the only separator, so rows stay
/// visually aligned in either label mode.
///
/// A [`Geometry::Unparsed`] input is passed through unchanged; the
/// formatter never fabricates structure the parser could not establish.
pub fn format(geometry: &Geometry, decimals: usize, mode: LabelMode) -> FormattedGeometry {
    let (atoms, had_header) = match geometry {
        Geometry::Parsed { atoms, had_header } => (atoms, *had_header),
        Geometry::Unparsed { raw } => {
            return FormattedGeometry {
                text: raw.clone(),
                had_header: false,
                count: 0,
            };
        }
    };

    let rows: Vec<String> = atoms
        .iter()
        .map(|atom| {
            let label = match mode {
                LabelMode::Symbol => atom.symbol.clone(),
                LabelMode::AtomicNumber => element::atomic_number(&atom.symbol).to_string(),
            };
            format!(
                "{:<2}{:>12.prec$}{:>12.prec$}{:>12.prec$}",
                label,
                atom.x,
                atom.y,
                atom.z,
                prec = decimals
            )
        })
        .collect();

    FormattedGeometry {
        text: rows.join("\n"),
        had_header,
        count: atoms.len(),
    }
}

/// Builds a full XYZ document (count line, comment line, coordinate lines)
/// from atomic-number rows, the way conformer atoms come out of the
/// database. An atomic number outside the element table is written as the
/// bare number.
pub fn write_xyz(rows: &[(u32, [f64; 3])], comment: &str) -> String {
    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(rows.len().to_string());
    lines.push(comment.to_string());
    for &(z, [x, y, z_coord]) in rows {
        let symbol = match element::symbol_for_number(z) {
            Some(symbol) => symbol.to_string(),
            None => z.to_string(),
        };
        lines.push(format!("{symbol} {x:.6} {y:.6} {z_coord:.6}"));
    }
    lines.join("\n")
}
