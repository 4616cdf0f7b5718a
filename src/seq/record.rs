// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

// A record for sequences: an identifier, a free-text description and a raw sequence. Works for
// nucleotide input as well as for translated output.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeqRecord {
    pub id: String,
    pub description: String,
    pub sequence: String,
}

impl SeqRecord {
    /// Builds a record from a FASTA header line (without the leading '>'). The id is the first
    /// whitespace-delimited token, the description is the whole header.
    pub fn from_header(header: &str, sequence: String) -> Self {
        let header = header.trim();
        let id = header.split_whitespace().next().unwrap_or("").to_string();
        SeqRecord {
            id,
            description: header.to_string(),
            sequence,
        }
    }

    /// The header line as written to FASTA, without the leading '>'. A description that already
    /// starts with the id (as read from a file) is not prefixed a second time.
    pub fn header(&self) -> String {
        if self.description.is_empty() || self.description == self.id {
            self.id.clone()
        } else if self
            .description
            .strip_prefix(&self.id)
            .is_some_and(|rest| rest.starts_with(char::is_whitespace))
        {
            self.description.clone()
        } else {
            format!("{} {}", self.id, self.description)
        }
    }

    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }
}
