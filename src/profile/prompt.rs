//! Interactive collection of a target profile on the terminal

use super::TargetProfile;
use crate::variation::{
    parse_length_bounds, GeneratorConfig, DEFAULT_MAX_LENGTH, DEFAULT_MIN_LENGTH,
};
use console::{style, Term};
use std::io::{self, BufRead};

/// Read one line of input; falls back to plain stdin when the terminal is
/// not interactive so answers can be piped in
fn read_answer(term: &Term) -> io::Result<String> {
    if term.is_term() {
        return term.read_line();
    }
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line)
}

/// Ask a single question, returning the trimmed answer or `None` when blank
fn ask(term: &Term, label: &str) -> io::Result<Option<String>> {
    term.write_str(&format!("{}: ", label))?;
    let answer = read_answer(term)?;
    let answer = answer.trim();
    Ok((!answer.is_empty()).then(|| answer.to_string()))
}

fn section(term: &Term, title: &str) -> io::Result<()> {
    term.write_line("")?;
    term.write_line(&format!("{} {}", style("[-]").cyan(), style(title).bold()))
}

/// Walk the operator through every profile field; blank answers skip a field
pub fn prompt_profile(term: &Term) -> io::Result<TargetProfile> {
    term.write_line(&format!(
        "{} Enter target details (leave blank to skip)",
        style("[*]").green()
    ))?;

    let mut profile = TargetProfile {
        first_name: ask(term, "First Name")?,
        last_name: ask(term, "Last Name")?,
        dob: ask(term, "DOB (DDMMYYYY)")?,
        pet_name: ask(term, "Pet Name")?,
        company: ask(term, "Company/School")?,
        ..TargetProfile::default()
    };

    section(term, "Family Intelligence")?;
    profile.partner_name = ask(term, "Partner Name")?;
    profile.partner_dob = ask(term, "Partner DOB")?;
    profile.father_name = ask(term, "Father Name")?;
    profile.father_dob = ask(term, "Father DOB")?;
    profile.mother_name = ask(term, "Mother Name")?;
    profile.mother_dob = ask(term, "Mother DOB")?;
    profile.sibling_names = ask(term, "Sibling Names (comma sep)")?;
    profile.sibling_dobs = ask(term, "Sibling DOBs (comma sep)")?;

    section(term, "Interests & Favorites")?;
    profile.fav_hobby = ask(term, "Favorite Hobby")?;
    profile.fav_person = ask(term, "Favorite Person")?;
    profile.fav_influencer = ask(term, "Favorite Influencer")?;

    term.write_line("")?;
    profile.keywords = ask(term, "Extra Keywords (comma separated)")?;

    Ok(profile)
}

/// Ask for the leet toggle and length bounds, layered over `base`
pub fn prompt_generator_config(term: &Term, base: GeneratorConfig) -> io::Result<GeneratorConfig> {
    section(term, "Configuration")?;
    let leet = ask(term, "Enable Leet Speak? (y/N)")?;
    let min = ask(term, &format!("Min Length (default {})", DEFAULT_MIN_LENGTH))?;
    let max = ask(term, &format!("Max Length (default {})", DEFAULT_MAX_LENGTH))?;

    let (min_length, max_length) = parse_length_answers(min.as_deref(), max.as_deref());
    Ok(GeneratorConfig {
        leet_enabled: parse_yes(leet.as_deref()),
        min_length,
        max_length,
        ..base
    })
}

/// Only an explicit `y` enables an option
pub fn parse_yes(answer: Option<&str>) -> bool {
    answer.is_some_and(|a| a.eq_ignore_ascii_case("y"))
}

/// Resolve length answers; blanks take the defaults and any non-numeric
/// answer resets both bounds to the defaults
pub fn parse_length_answers(min: Option<&str>, max: Option<&str>) -> (usize, usize) {
    parse_length_bounds(min, max, (DEFAULT_MIN_LENGTH, DEFAULT_MAX_LENGTH))
}
