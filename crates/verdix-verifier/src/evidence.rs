//! Evidence classification: trust/rank filtering and stance tagging

use tracing::debug;
use url::Url;
use verdix_domain::{EvidenceItem, Stance};
use verdix_search::SearchHit;

use crate::types::EvidenceTally;
use crate::VerifierConfig;

/// Rank assumed for hits that report none
const UNRANKED: u32 = 99;

const MATCH_SCORE: f64 = 1.0;

/// Filter, tag and tally raw search hits
///
/// Hits are examined in order. A hit needs a title, a link with a host, and
/// either a trusted publisher or a rank within `top_rank_cutoff`. Processing
/// stops as soon as `max_sources` items are retained, so later hits never
/// contribute to the counts.
pub fn classify_evidence(hits: &[SearchHit], config: &VerifierConfig) -> EvidenceTally {
    let contradict: Vec<String> = config.contradict_keywords.iter().map(|k| k.to_lowercase()).collect();
    let support: Vec<String> = config.support_keywords.iter().map(|k| k.to_lowercase()).collect();

    let mut tally = EvidenceTally::default();

    for hit in hits {
        if tally.items.len() >= config.max_sources {
            break;
        }

        let (Some(title), Some(link)) = (non_empty(&hit.title), non_empty(&hit.link)) else {
            debug!("Skipping hit without title or link");
            continue;
        };

        let Some(publisher) = publisher_of(link) else {
            debug!("Skipping hit with unparseable link: {}", link);
            continue;
        };

        let trusted = config
            .trusted_domains
            .iter()
            .any(|d| publisher.contains(d.as_str()));
        let top_rank = hit.position.unwrap_or(UNRANKED) <= config.top_rank_cutoff;

        if !trusted && !top_rank {
            continue;
        }

        let blob = format!("{} {}", title, hit.snippet.as_deref().unwrap_or("")).to_lowercase();

        let stance = if contradict.iter().any(|k| blob.contains(k.as_str())) {
            tally.contradict_count += 1;
            Stance::Contradicts
        } else if support.iter().any(|k| blob.contains(k.as_str())) {
            tally.support_count += 1;
            Stance::Supports
        } else {
            Stance::Unclear
        };

        tally.items.push(EvidenceItem {
            title: title.to_string(),
            url: link.to_string(),
            publisher,
            match_score: MATCH_SCORE,
            stance,
        });
    }

    tally
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

fn publisher_of(link: &str) -> Option<String> {
    let parsed = Url::parse(link).ok()?;
    parsed.host_str().map(|h| h.to_lowercase())
}
