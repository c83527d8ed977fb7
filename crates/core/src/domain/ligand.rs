// Ligand Domain Model
// HET records from SIENA-produced PDB files

/// Line prefix marking a heteroatom (ligand) record. The trailing space
/// matters: it keeps `HETATM` lines from matching.
pub const HET_RECORD_PREFIX: &str = "HET ";

/// One ligand parsed from a `HET` record: name, chain identifier, residue
/// number. SIENA occasionally folds the residue number into the chain field
/// (`A1012` instead of chain `A`, residue `1012`); `split_chain_digits`
/// repairs that.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LigandRecord {
    name: String,
    chain_id: String,
    residue_number: String,
}

impl LigandRecord {
    /// Parse a `HET` record line into a ligand.
    ///
    /// Returns None if the line does not carry the `HET ` prefix or has
    /// fewer than the four whitespace-separated fields
    /// `[tag, name, chain, residue]`. Trailing fields are ignored.
    pub fn parse(line: &str) -> Option<Self> {
        if !line.starts_with(HET_RECORD_PREFIX) {
            return None;
        }
        let mut fields = line.split_whitespace().skip(1);
        let name = fields.next()?;
        let chain_id = fields.next()?;
        let residue_number = fields.next()?;
        Some(Self {
            name: name.to_string(),
            chain_id: chain_id.to_string(),
            residue_number: residue_number.to_string(),
        })
    }

    /// True when the chain field carries any decimal digit, i.e. when the
    /// chain and residue number were fused into one token.
    pub fn chain_has_digits(&self) -> bool {
        self.chain_id.chars().any(|c| c.is_ascii_digit())
    }

    /// Split a fused chain field: the first character becomes the chain, the
    /// remaining characters replace the residue number. The original residue
    /// token is discarded, not merged. A single-character chain field has
    /// nothing to promote, so the original residue number is kept there.
    pub fn split_chain_digits(&mut self) {
        let mut chars = self.chain_id.chars();
        let first = match chars.next() {
            Some(c) => c,
            None => return,
        };
        let rest: String = chars.collect();
        if !rest.is_empty() {
            self.residue_number = rest;
        }
        self.chain_id = first.to_string();
    }

    /// Identifier in the `NAME_CHAIN_RESIDUE` form used downstream.
    pub fn identifier(&self) -> String {
        format!("{}_{}_{}", self.name, self.chain_id, self.residue_number)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn chain_id(&self) -> &str {
        &self.chain_id
    }

    pub fn residue_number(&self) -> &str {
        &self.residue_number
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_well_formed_record() {
        let record = LigandRecord::parse("HET    NAG  A 201      14").unwrap();
        assert_eq!(record.name(), "NAG");
        assert_eq!(record.chain_id(), "A");
        assert_eq!(record.residue_number(), "201");
        assert_eq!(record.identifier(), "NAG_A_201");
    }

    #[test]
    fn test_parse_rejects_non_het_lines() {
        assert!(LigandRecord::parse("ATOM      1  N   MET A   1").is_none());
        assert!(LigandRecord::parse("HETATM  100  C1  NAG A 201").is_none());
        assert!(LigandRecord::parse("").is_none());
    }

    #[test]
    fn test_parse_rejects_truncated_records() {
        assert!(LigandRecord::parse("HET    NAG  A").is_none());
        assert!(LigandRecord::parse("HET    NAG").is_none());
        assert!(LigandRecord::parse("HET ").is_none());
    }

    #[test]
    fn test_chain_digit_detection() {
        let fused = LigandRecord::parse("HET LIG A1 23").unwrap();
        assert!(fused.chain_has_digits());

        let clean = LigandRecord::parse("HET LIG A 23").unwrap();
        assert!(!clean.chain_has_digits());
    }

    #[test]
    fn test_split_replaces_residue_number() {
        let mut record = LigandRecord::parse("HET LIG A1 23").unwrap();
        record.split_chain_digits();
        assert_eq!(record.chain_id(), "A");
        assert_eq!(record.residue_number(), "1");
        assert_eq!(record.identifier(), "LIG_A_1");
    }

    #[test]
    fn test_split_with_multi_digit_suffix() {
        let mut record = LigandRecord::parse("HET NAG B1012 7").unwrap();
        record.split_chain_digits();
        assert_eq!(record.chain_id(), "B");
        assert_eq!(record.residue_number(), "1012");
        assert_eq!(record.identifier(), "NAG_B_1012");
    }

    #[test]
    fn test_split_single_character_chain_keeps_residue() {
        let mut record = LigandRecord::parse("HET LIG 7 23").unwrap();
        record.split_chain_digits();
        assert_eq!(record.chain_id(), "7");
        assert_eq!(record.residue_number(), "23");
        assert_eq!(record.identifier(), "LIG_7_23");
    }
}
