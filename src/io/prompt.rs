//! Interactive topology selection

use color_eyre::eyre::{Result, WrapErr};
use huckel::topology::parse_atom_count;
use huckel::{Category, Topology};
use std::io::{BufRead, Write};
use tracing::debug;

const CATEGORY_PROMPT: &str = "What system do you want to solve? Press 1: linear polyene, \
     2: cyclic polyene, 3: platonic solids, 4: Buckminsterfullerene ";
const SOLID_PROMPT: &str = "Which Platonic solid are you interested in? \
     (tetrahedron, octahedron, cube, icosahedron, dodecahedron) ";

/// Ask for a category and, where needed, an atom count or solid name.
///
/// A bad answer ends the session with the corresponding error; there is no re-prompt.
pub fn prompt_topology<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<Topology> {
    writeln!(out, "Huckel MO calculator")?;
    let category: Category = ask(input, out, CATEGORY_PROMPT)?.parse()?;
    debug!("Selected category {}: {}", category.index(), category.label());

    let mut atoms = None;
    let mut solid = None;
    if category.needs_atom_count() {
        let question = format!("Number of carbon atoms in the {}: ", category.label());
        let count = parse_atom_count(&ask(input, out, &question)?)?;
        atoms = Some(count as i64);
    } else if category == Category::PlatonicSolid {
        solid = Some(ask(input, out, SOLID_PROMPT)?);
    }
    Ok(Topology::from_category(category, atoms, solid.as_deref())?)
}

fn ask<R: BufRead, W: Write>(input: &mut R, out: &mut W, question: &str) -> Result<String> {
    write!(out, "{}", question)?;
    out.flush()?;
    let mut line = String::new();
    input
        .read_line(&mut line)
        .wrap_err("Failed to read answer")?;
    Ok(line.trim().to_string())
}
