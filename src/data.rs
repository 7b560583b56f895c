// src/data.rs
//
// Canonical and view-layer roster data.
//
// - Roster: read-only holder for the loaded member list. Only a reload
//           replaces it.
// - RosterView: derived (view) data produced from Roster by applying the
//               current search/role filter. Holds row indices into the
//               canonical list, so display never duplicates member data.

use std::mem::take;

use crate::csv;
use crate::sanitize::{key_contains, key_eq, search_key};

/// One roster entry: `name, member_code, role` from one CSV line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Member {
    pub name: String,
    pub code: String,
    pub role: String,
}

impl Member {
    /// Build from one parsed CSV row. Rows shorter than 3 fields get empty
    /// strings for the missing columns; extra columns are ignored.
    pub fn from_fields(mut fields: Vec<String>) -> Self {
        let mut next = |i: usize| fields.get_mut(i).map(take).unwrap_or_default();
        Self { name: next(0), code: next(1), role: next(2) }
    }

    /// All searchable fields, in column order.
    pub fn fields(&self) -> [&str; 3] {
        [&self.name, &self.code, &self.role]
    }
}

/// Authoritative member list, loaded once and replaced wholesale on reload.
#[derive(Clone, Debug, Default)]
pub struct Roster {
    pub members: Vec<Member>,
}

impl Roster {
    pub fn parse(text: &str) -> Self {
        let members = csv::parse_rows(text)
            .into_iter()
            .map(Member::from_fields)
            .collect();
        Self { members }
    }

    pub fn len(&self) -> usize { self.members.len() }
    pub fn is_empty(&self) -> bool { self.members.is_empty() }

    /// Distinct role labels in first-seen order, for the role selector.
    pub fn roles(&self) -> Vec<String> {
        let mut out: Vec<String> = Vec::new();
        for m in &self.members {
            if m.role.is_empty() { continue; }
            if !out.iter().any(|r| r == &m.role) {
                out.push(m.role.clone());
            }
        }
        out
    }

    /// Whether any member carries this code.
    pub fn has_code(&self, code: &str) -> bool {
        self.members.iter().any(|m| m.code == code)
    }
}

/// Current filter inputs. Both empty means "everything".
#[derive(Clone, Debug, Default)]
pub struct Filter {
    /// Substring search over all fields, diacritic- and case-insensitive.
    pub query: String,
    /// Exact role match after folding; empty means any role.
    pub role: String,
}

impl Filter {
    pub fn is_empty(&self) -> bool {
        self.query.trim().is_empty() && self.role.trim().is_empty()
    }

    /// Search hits if any field contains the folded query; the role filter
    /// must equal the folded role exactly. Both predicates AND together.
    /// Leading/trailing whitespace on either input never counts.
    pub fn matches(&self, m: &Member) -> bool {
        let q = search_key(self.query.trim());
        let role = search_key(self.role.trim());
        Self::matches_keys(&q, &role, m)
    }

    fn matches_keys(query_key: &str, role_key: &str, m: &Member) -> bool {
        let hit = query_key.is_empty()
            || m.fields().iter().any(|f| key_contains(f, query_key));
        let role_ok = role_key.is_empty() || key_eq(&m.role, role_key);
        hit && role_ok
    }
}

/// Filtered view for display.
/// Holds positions of kept rows in the canonical roster.
#[derive(Clone, Debug, Default)]
pub struct RosterView {
    pub row_ix: Vec<usize>,
}

impl RosterView {
    /// Apply `filter` to `roster`, preserving order. The folded filter keys
    /// are computed once per pass, not per row.
    pub fn filtered(roster: &Roster, filter: &Filter) -> Self {
        if filter.is_empty() {
            return Self { row_ix: (0..roster.members.len()).collect() };
        }
        let query_key = search_key(filter.query.trim());
        let role_key = search_key(filter.role.trim());
        let row_ix = roster.members.iter().enumerate()
            .filter(|(_, m)| Filter::matches_keys(&query_key, &role_key, m))
            .map(|(i, _)| i)
            .collect();
        Self { row_ix }
    }

    pub fn len(&self) -> usize { self.row_ix.len() }
    pub fn is_empty(&self) -> bool { self.row_ix.is_empty() }

    /// Borrow a member by projected row index.
    pub fn member<'a>(&self, roster: &'a Roster, i: usize) -> Option<&'a Member> {
        self.row_ix.get(i).and_then(|&ix| roster.members.get(ix))
    }

    /// Member codes of the projected rows, in view order.
    pub fn codes(&self, roster: &Roster) -> Vec<String> {
        self.row_ix.iter()
            .filter_map(|&ix| roster.members.get(ix))
            .map(|m| m.code.clone())
            .collect()
    }
}
