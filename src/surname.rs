use super::case::to_lowercase;
use super::lexicon::Lexicon;
use super::token::{merge, Tokens};
use compact_str::CompactString;

/// Attach each surname particle to the word after it, so "van der Berg"
/// becomes one unit. A single backward pass handles chains, because each
/// join produces the word the preceding particle then attaches to.
///
/// A particle is always joined, even across its own comma. The merged unit
/// is followed by a comma if either part was.
pub fn join_particles(tokens: &mut Tokens, lexicon: &Lexicon) {
    if tokens.len() < 2 {
        return;
    }

    for i in (0..tokens.len() - 1).rev() {
        if lexicon.is_surname_prefix(&tokens[i].text) {
            let comma = tokens[i].comma;
            merge(tokens, i, i + 2);
            tokens[i].comma |= comma;
        }
    }
}

/// Fold "X and Y" style runs (e.g. "John and Jane", "Romero y Galdámez")
/// into a single unit.
pub fn join_conjunctions(tokens: &mut Tokens, lexicon: &Lexicon) {
    if tokens.len() < 3 {
        return;
    }

    let mut i = tokens.len() - 3;
    loop {
        let joined = lexicon.is_conjunction(&tokens[i + 1].text);
        if joined {
            // Lowercase marks the word as joined for the case normalizer
            let lowered = to_lowercase(&tokens[i + 1].text);
            tokens[i + 1].text = CompactString::from(lowered);
            merge(tokens, i, i + 3);
        }

        // After a join, skip the word that was just absorbed as the left-hand
        // side, so a following conjunction is judged against the merged unit
        let step = if joined { 2 } else { 1 };
        if i < step {
            break;
        }
        i -= step;
    }
}
