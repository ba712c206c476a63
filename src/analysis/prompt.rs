//! Prompt text for each analysis.

/// Structure elucidation from an attached image.
pub const IMAGE: &str = "Identify the molecule shown in the attached image. \
Give its name, molecular formula, a short description of how you identified \
it, notable properties and functional groups. Provide its structure as \
canonical SMILES, 3D atom coordinates in Angstroms with bonds between atom \
indices, and a 2D depiction layout (structure2d) with explicit atom ids. \
Bond orders are 1 single, 2 double, 3 triple, 4 aromatic.";

/// Entity extraction from free text.
#[must_use]
pub fn text(input: &str) -> String {
    format!(
        "Analyze the following scientific text. Summarize it, list every \
         chemical entity (compounds, elements, reactions) with its type and a \
         short description, and list the key findings.\n\nText:\n{input}"
    )
}

/// Check whether two inputs name molecules or are structure notations.
#[must_use]
pub fn validate(first: &str, second: &str) -> String {
    format!(
        "Decide whether each input is a recognized molecule: a common or IUPAC \
         name, a molecular formula, a SMILES string or an InChI. Answer with \
         input1Valid and input2Valid.\n\nInput 1: {first}\nInput 2: {second}"
    )
}

/// Compare two molecules that have already been validated.
#[must_use]
pub fn compare(first: &str, second: &str) -> String {
    format!(
        "Compare these two molecules. For each give the name, formula and \
         structure (SMILES, 3D atoms and bonds, and a structure2d layout). \
         Rate their structural similarity from 0 to 100, then list their \
         similarities and differences and give a one-paragraph summary.\n\n\
         Molecule 1: {first}\nMolecule 2: {second}"
    )
}

/// A research report on `topic`, optionally grounded in `context`.
#[must_use]
pub fn report(topic: &str, context: &str) -> String {
    let mut prompt = format!(
        "Write a concise research report on: {topic}. Include a title, an \
         abstract, several titled sections and a list of references."
    );
    if !context.trim().is_empty() {
        prompt.push_str("\n\nBase the report on this material:\n");
        prompt.push_str(context.trim());
    }
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompts_carry_their_inputs() {
        assert!(text("benzene ring").contains("benzene ring"));
        let v = validate("aspirin", "CCO");
        assert!(v.contains("Input 1: aspirin") && v.contains("Input 2: CCO"));
        assert!(compare("a", "b").contains("Molecule 2: b"));
    }

    #[test]
    fn report_context_is_optional() {
        assert!(!report("catalysis", "  ").contains("material"));
        assert!(report("catalysis", "notes").ends_with("notes"));
    }
}
