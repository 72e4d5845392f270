// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Pharos-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pharos and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::index::SearchRecord;

/// A record matched by a query, with its relevance score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub record: SearchRecord,
    pub score: i64,
}

/// Ranks index records against a query, best match first.
///
/// An empty or whitespace-only query is "no active search" and returns no
/// hits. Matching is a case-insensitive subsequence test; scoring blends a
/// rapidfuzz ratio with subsequence statistics so tight, early, boundary
/// matches win. Ties break by name then kind to keep the order stable.
pub fn ranked_matches(index: &[SearchRecord], query: &str) -> Vec<SearchHit> {
    let needle = query.trim();
    if needle.is_empty() {
        return Vec::new();
    }
    let needle = needle.to_lowercase();

    let mut scored = Vec::<(i64, usize)>::new();
    for (idx, record) in index.iter().enumerate() {
        let haystack = record.name().to_lowercase();
        if let Some(score) = fuzzy_score(&needle, &haystack) {
            scored.push((score, idx));
        }
    }

    scored.sort_by(|(score_a, idx_a), (score_b, idx_b)| {
        score_b
            .cmp(score_a)
            .then_with(|| index[*idx_a].name().cmp(index[*idx_b].name()))
            .then_with(|| index[*idx_a].kind().cmp(&index[*idx_b].kind()))
    });

    scored
        .into_iter()
        .map(|(score, idx)| SearchHit {
            record: index[idx].clone(),
            score,
        })
        .collect()
}

fn fuzzy_score(needle: &str, haystack: &str) -> Option<i64> {
    let subseq = subsequence_stats(needle, haystack)?;
    let ratio = rapidfuzz::fuzz::ratio(needle.chars(), haystack.chars());
    let ratio_score = (ratio * 1000.0).round() as i64;

    let mut score = ratio_score;
    score -= subseq.span as i64;
    score -= (subseq.first as i64) / 4;
    score += (subseq.consecutive as i64) * 40;
    if subseq.start_boundary {
        score += 150;
    }
    if haystack.contains(needle) {
        score += 2000;
    } else {
        score += 500;
    }

    Some(score)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SubsequenceStats {
    first: usize,
    span: usize,
    consecutive: usize,
    start_boundary: bool,
}

fn subsequence_stats(needle: &str, haystack: &str) -> Option<SubsequenceStats> {
    let mut needle_iter = needle.chars().peekable();
    let mut first: Option<usize> = None;
    let mut last: usize = 0;
    let mut prev_match: Option<usize> = None;
    let mut consecutive: usize = 0;
    let mut start_boundary = false;
    let mut prev_hay: Option<char> = None;

    for (idx, ch) in haystack.chars().enumerate() {
        let Some(&want) = needle_iter.peek() else {
            break;
        };

        if ch == want {
            needle_iter.next();

            if first.is_none() {
                first = Some(idx);
                start_boundary = prev_hay.map_or(true, is_boundary_char);
            }

            if let Some(prev) = prev_match {
                if idx == prev + 1 {
                    consecutive += 1;
                }
            }
            prev_match = Some(idx);
            last = idx;
        }

        prev_hay = Some(ch);
    }

    if needle_iter.peek().is_some() {
        return None;
    }

    let first = first?;
    Some(SubsequenceStats {
        first,
        span: last.saturating_sub(first).saturating_add(1),
        consecutive,
        start_boundary,
    })
}

fn is_boundary_char(ch: char) -> bool {
    ch == '_'
}
