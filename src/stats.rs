use std::collections::HashMap;
use std::path::PathBuf;

use crate::domain::extract_host;
use crate::sqlite::DateRange;

/// Number of domains kept in the ranking.
pub const TOP_DOMAINS: usize = 5;

/// Visit counts per host, remembering the order in which each host was first
/// seen so ties rank deterministically.
#[derive(Debug, Default, Clone)]
pub struct DomainCounts {
    order: Vec<String>,
    counts: HashMap<String, u32>,
    total: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedEntry {
    pub rank: usize,
    pub domain: String,
    pub visits: u32,
}

impl DomainCounts {
    pub fn from_urls<I, S>(urls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut counts = Self::default();
        for url in urls {
            counts.record(extract_host(url.as_ref()));
        }
        counts
    }

    pub fn record(&mut self, domain: String) {
        self.total += 1;
        match self.counts.get_mut(&domain) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(domain.clone(), 1);
                self.order.push(domain);
            }
        }
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn unique(&self) -> usize {
        self.order.len()
    }

    pub fn get(&self, domain: &str) -> u32 {
        self.counts.get(domain).copied().unwrap_or(0)
    }

    pub fn ranked(&self, limit: usize) -> Vec<RankedEntry> {
        let mut sorted: Vec<(&String, u32)> = self
            .order
            .iter()
            .map(|domain| (domain, self.get(domain)))
            .collect();
        // sort_by is stable, first-seen order survives among equal counts
        sorted.sort_by(|a, b| b.1.cmp(&a.1));

        sorted
            .into_iter()
            .take(limit)
            .enumerate()
            .map(|(i, (domain, visits))| RankedEntry {
                rank: i + 1,
                domain: domain.clone(),
                visits,
            })
            .collect()
    }
}

pub fn rank_domains<I, S>(urls: I) -> Vec<RankedEntry>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    DomainCounts::from_urls(urls).ranked(TOP_DOMAINS)
}

#[derive(Debug)]
pub struct ExportSummary {
    pub history_path: PathBuf,
    pub backup_path: PathBuf,
    pub csv_path: PathBuf,
    pub url_count: usize,
    pub date_range: Option<DateRange>,
}

#[derive(Debug)]
pub struct AnalysisResult {
    pub total_urls: u32,
    pub unique_domains: usize,
    pub ranked: Vec<RankedEntry>,
    pub report_path: PathBuf,
}
