//! Wire format for stored game sessions.
//!
//! A session blob is a single token stream: the table size in decimal, then
//! `size * size` cell markers in row-major order, every token followed by one
//! space (including the last). No header, version field, or checksum; the
//! layout must stay byte-compatible with previously written blobs.
//!
//! Guard facing is not part of the format. Decoding assigns every guard a
//! fresh uniform random facing, so facings do not survive a save/load cycle.

use crate::error::FormatError;
use crate::table::{Facing, GameTable, Guard};

/// Serialize a table snapshot. Pure; the guard roster is not written.
pub fn encode(table: &GameTable) -> String {
    let mut blob = String::new();
    blob.push_str(&table.size().to_string());
    blob.push(' ');
    for row in 0..table.size() {
        for col in 0..table.size() {
            blob.push_str(table.cell(row, col));
            blob.push(' ');
        }
    }
    blob
}

/// Parse a blob back into a table, rebuilding the guard roster from cells
/// equal to `guard_marker`.
pub fn decode(blob: &str, guard_marker: &str) -> Result<GameTable, FormatError> {
    let mut tokens = blob.split(' ');

    let size_token = tokens.next().unwrap_or_default();
    let size: usize = size_token
        .parse()
        .map_err(|_| FormatError::InvalidSize(size_token.to_string()))?;
    if size == 0 {
        return Err(FormatError::NonPositiveSize);
    }
    let expected = size
        .checked_mul(size)
        .ok_or(FormatError::SizeTooLarge(size))?;

    let mut table = GameTable::new(size, "");
    let mut found = 0;
    for row in 0..size {
        for col in 0..size {
            let token = tokens
                .next()
                .ok_or(FormatError::Truncated { expected, found })?;
            table.set_cell(row, col, token);
            found += 1;

            if token == guard_marker {
                // One independent draw per guard.
                let mut rng = rand::thread_rng();
                table.guards.push(Guard {
                    row,
                    col,
                    facing: Facing::random(&mut rng),
                });
            }
        }
    }

    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Facing;

    const GUARD: &str = "G";

    fn sample_table() -> GameTable {
        let mut table = GameTable::new(2, ".");
        table.set_cell(0, 0, "#");
        table.set_cell(0, 1, "G");
        table.set_cell(1, 0, "G");
        table
    }

    #[test]
    fn encode_matches_legacy_layout() {
        assert_eq!(encode(&sample_table()), "2 # G G . ");
    }

    #[test]
    fn decode_rebuilds_cells_and_guards() {
        let table = decode("2 # G G . ", GUARD).unwrap();

        assert_eq!(table.size(), 2);
        assert_eq!(table.cell(0, 0), "#");
        assert_eq!(table.cell(0, 1), "G");
        assert_eq!(table.cell(1, 0), "G");
        assert_eq!(table.cell(1, 1), ".");

        assert_eq!(table.guards.len(), 2);
        assert_eq!((table.guards[0].row, table.guards[0].col), (0, 1));
        assert_eq!((table.guards[1].row, table.guards[1].col), (1, 0));
    }

    #[test]
    fn roundtrip_preserves_cells_without_guards() {
        let mut table = GameTable::new(3, ".");
        table.set_cell(0, 0, "#");
        table.set_cell(1, 2, "E");
        table.set_cell(2, 1, "P");

        let decoded = decode(&encode(&table), GUARD).unwrap();

        assert_eq!(decoded.size(), table.size());
        for row in 0..3 {
            for col in 0..3 {
                assert_eq!(decoded.cell(row, col), table.cell(row, col));
            }
        }
        assert!(decoded.guards.is_empty());
    }

    #[test]
    fn guard_count_matches_marker_count() {
        let mut table = GameTable::new(4, ".");
        table.set_cell(0, 3, "G");
        table.set_cell(2, 2, "G");
        table.set_cell(3, 0, "G");

        let decoded = decode(&encode(&table), GUARD).unwrap();
        assert_eq!(decoded.guards.len(), table.count_marker(GUARD));
    }

    #[test]
    fn decoded_facings_stay_in_range() {
        // Facings are random; run a handful of decodes.
        for _ in 0..16 {
            let table = decode("2 # G G . ", GUARD).unwrap();
            for guard in &table.guards {
                assert!(Facing::ALL.contains(&guard.facing));
            }
        }
    }

    #[test]
    fn truncated_payload_is_rejected() {
        let err = decode("3 . . .", GUARD).unwrap_err();
        assert!(matches!(
            err,
            FormatError::Truncated {
                expected: 9,
                found: 3
            }
        ));
    }

    #[test]
    fn non_numeric_size_is_rejected() {
        let err = decode("x . .", GUARD).unwrap_err();
        assert!(matches!(err, FormatError::InvalidSize(token) if token == "x"));
    }

    #[test]
    fn zero_size_is_rejected() {
        assert!(matches!(
            decode("0 ", GUARD).unwrap_err(),
            FormatError::NonPositiveSize
        ));
    }

    #[test]
    fn empty_blob_is_rejected() {
        assert!(matches!(
            decode("", GUARD).unwrap_err(),
            FormatError::InvalidSize(_)
        ));
    }
}
