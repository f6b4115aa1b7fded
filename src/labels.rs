//! Static hostname → label tables used by the report.
//!
//! The source lists repeat several hostnames with different labels (for
//! example `www.spotify.com` appears seven times in the job list). Building a
//! [`LabelTable`] collapses those last-write-wins; the keys that lost earlier
//! labels are kept in [`LabelTable::overridden`] so the ambiguity stays
//! visible instead of being silently resolved.

use once_cell::sync::Lazy;
use std::collections::HashMap;
use tracing::debug;

pub const FALLBACK_LABEL: &str = "No available";

#[derive(Debug, Clone)]
pub struct LabelTable {
    name: &'static str,
    labels: HashMap<&'static str, &'static str>,
    overridden: Vec<&'static str>,
}

impl LabelTable {
    pub fn from_entries(name: &'static str, entries: &[(&'static str, &'static str)]) -> Self {
        let mut labels = HashMap::with_capacity(entries.len());
        let mut overridden = Vec::new();

        for &(domain, label) in entries {
            if let Some(previous) = labels.insert(domain, label) {
                if !overridden.contains(&domain) {
                    overridden.push(domain);
                }
                debug!(
                    action = "override",
                    component = "label_table",
                    table = name,
                    domain,
                    previous,
                    label,
                    "Duplicate domain replaces earlier label"
                );
            }
        }

        Self {
            name,
            labels,
            overridden,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn get(&self, domain: &str) -> Option<&'static str> {
        self.labels.get(domain).copied()
    }

    pub fn label_for(&self, domain: &str) -> &'static str {
        self.get(domain).unwrap_or(FALLBACK_LABEL)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Domains defined more than once, in order of their first repeat.
    pub fn overridden(&self) -> &[&'static str] {
        &self.overridden
    }
}

static JOB_POSITION_TABLE: Lazy<LabelTable> =
    Lazy::new(|| LabelTable::from_entries("job_positions", JOB_POSITIONS));
static SOFT_SKILL_TABLE: Lazy<LabelTable> =
    Lazy::new(|| LabelTable::from_entries("soft_skills", SOFT_SKILLS));

pub fn job_positions() -> &'static LabelTable {
    &JOB_POSITION_TABLE
}

pub fn soft_skills() -> &'static LabelTable {
    &SOFT_SKILL_TABLE
}

const JOB_POSITIONS: &[(&str, &str)] = &[
    ("lichess.org", "Chess Player"),
    ("www.google.com", "Search Engine Optimization Specialist"),
    ("www.linkedin.com", "Professional Networker"),
    ("learn.microsoft.com", "Microsoft Certified Professional"),
    ("ua.mail.yahoo.com", "Email Administrator"),
    ("www.youtube.com", "Video Content Creator"),
    ("github.com", "Open Source Contributor"),
    ("www.amazon.com", "E-commerce Specialist"),
    ("www.netflix.com", "Entertainment Content Analyst"),
    ("stackoverflow.com", "Community Moderator"),
    ("www.udemy.com", "Online Course Instructor"),
    ("www.instagram.com", "Social Media Manager"),
    ("www.facebook.com", "Social Networking Analyst"),
    ("www.reddit.com", "Forum Moderator"),
    ("www.airbnb.com", "Hospitality Consultant"),
    ("www.nytimes.com", "Journalism Researcher"),
    ("www.apple.com", "iOS App Developer"),
    ("www.microsoft.com", "Software Developer"),
    ("www.ibm.com", "Data Scientist"),
    ("www.spotify.com", "Music Streaming Analyst"),
    ("www.zillow.com", "Real Estate Consultant"),
    ("www.udacity.com", "Online Learning Advocate"),
    ("www.spotify.com", "Music Streaming Analyst"),
    ("www.medium.com", "Content Writer"),
    ("www.bloomberg.com", "Financial Analyst"),
    ("www.ted.com", "Public Speaker"),
    ("www.quora.com", "Knowledge Curator"),
    ("www.weather.com", "Meteorological Data Analyst"),
    ("www.coursera.org", "Online Course Creator"),
    ("www.nike.com", "Sports Apparel Consultant"),
    ("www.wikipedia.org", "Content Editor"),
    ("www.pexels.com", "Photography Enthusiast"),
    ("www.twitch.tv", "Live Streaming Specialist"),
    ("www.cisco.com", "Network Security Analyst"),
    ("www.nasa.gov", "Space Exploration Researcher"),
    ("www.etsy.com", "Handmade Crafts Artisan"),
    ("www.hulu.com", "Streaming Content Reviewer"),
    ("www.uber.com", "Ride-share Consultant"),
    ("www.waze.com", "Navigation App Specialist"),
    ("www.salesforce.com", "CRM Administrator"),
    ("www.sony.com", "Entertainment Systems Analyst"),
    ("www.adobe.com", "Graphic Design Specialist"),
    ("www.bbc.com", "Broadcast Journalism Analyst"),
    ("www.cnbc.com", "Financial News Analyst"),
    ("www.mercedes-benz.com", "Automotive Technology Specialist"),
    ("www.coca-cola.com", "Beverage Marketing Specialist"),
    ("www.starbucks.com", "Coffee Culture Analyst"),
    ("www.marvel.com", "Comic Book Enthusiast"),
    ("www.ikea.com", "Interior Design Consultant"),
    ("www.spotify.com", "Music Playlist Curator"),
    ("www.snapchat.com", "Snap Content Creator"),
    ("www.playstation.com", "Gaming Console Analyst"),
    ("www.nintendo.com", "Video Game Developer"),
    ("www.fitbit.com", "Fitness Technology Consultant"),
    ("www.yelp.com", "Review Platform Analyst"),
    ("www.tripadvisor.com", "Travel Recommendations Analyst"),
    ("www.spotify.com", "Music Genre Analyst"),
    ("www.ancestry.com", "Genealogy Researcher"),
    ("www.soundcloud.com", "Music Streaming Enthusiast"),
    ("www.zappos.com", "Footwear Fashion Consultant"),
    ("www.grammarly.com", "Grammar and Writing Analyst"),
    ("www.hubspot.com", "Inbound Marketing Specialist"),
    ("www.patagonia.com", "Sustainable Fashion Advocate"),
    ("www.tesla.com", "Electric Vehicle Technology Analyst"),
    ("www.nike.com", "Sports Performance Analyst"),
    ("www.ibm.com", "Quantum Computing Researcher"),
    ("www.britannica.com", "Encyclopedia Editor"),
    ("www.duolingo.com", "Language Learning Specialist"),
    ("www.hbo.com", "Streaming Content Analyst"),
    ("www.ibm.com", "Blockchain Technology Consultant"),
    ("www.cnn.com", "News Broadcasting Analyst"),
    ("www.coca-cola.com", "Beverage Taste Tester"),
    ("www.ibm.com", "Quantum Computing Researcher"),
    ("www.twitch.tv", "Esports Analyst"),
    ("www.canon.com", "Photography Equipment Specialist"),
    ("www.spotify.com", "Music Discovery Analyst"),
    ("www.slack.com", "Team Collaboration Specialist"),
    ("www.squarespace.com", "Website Design Consultant"),
    ("www.ebay.com", "E-commerce Entrepreneur"),
    ("www.dropbox.com", "Cloud Storage Technology Specialist"),
    ("www.samsung.com", "Consumer Electronics Analyst"),
    ("www.netflix.com", "Binge-Watching Expert"),
    ("www.ibm.com", "Artificial Intelligence Researcher"),
    ("www.spotify.com", "Music Recommendation Analyst"),
    ("www.oracle.com", "Database Management Specialist"),
    ("www.nintendo.com", "Gaming Industry Analyst"),
    ("www.spotify.com", "Podcast Enthusiast"),
    ("www.ibm.com", "Quantum Computing Researcher"),
    ("www.ibm.com", "Quantum Computing Researcher"),
];

const SOFT_SKILLS: &[(&str, &str)] = &[
    ("lichess.org", "Strategic Thinking"),
    ("www.google.com", "Analytical Skills"),
    ("www.linkedin.com", "Communication Skills"),
    ("learn.microsoft.com", "Technical Skills"),
    ("ua.mail.yahoo.com", "Organizational Skills"),
    ("www.youtube.com", "Video Editing Skills"),
    ("github.com", "Open Source Collaboration"),
    ("www.amazon.com", "E-commerce Strategy"),
    ("www.netflix.com", "Content Consumption Management"),
    ("stackoverflow.com", "Problem-Solving Abilities"),
    ("www.udemy.com", "Online Teaching Skills"),
    ("www.instagram.com", "Social Media Management"),
    ("www.facebook.com", "Social Networking Proficiency"),
    ("www.reddit.com", "Community Engagement"),
    ("www.airbnb.com", "Hospitality Management"),
    ("www.nytimes.com", "Journalistic Research Skills"),
    ("www.apple.com", "iOS App Development Skills"),
    ("www.microsoft.com", "Software Development Proficiency"),
    ("www.ibm.com", "Data Science Competence"),
    ("www.spotify.com", "Music Streaming Knowledge"),
    ("www.zillow.com", "Real Estate Market Awareness"),
    ("www.udacity.com", "Online Learning Facilitation"),
    ("www.spotify.com", "Music Streaming Expertise"),
    ("www.medium.com", "Content Creation Writing"),
    ("www.bloomberg.com", "Financial Analysis Skills"),
    ("www.ted.com", "Public Speaking Abilities"),
    ("www.quora.com", "Knowledge Sharing Skills"),
    ("www.weather.com", "Meteorological Data Interpretation"),
    ("www.coursera.org", "Online Course Design"),
    ("www.nike.com", "Sports Apparel Design Skills"),
    ("www.wikipedia.org", "Content Editing Proficiency"),
    ("www.pexels.com", "Photography Editing Skills"),
    ("www.twitch.tv", "Live Streaming Expertise"),
    ("www.cisco.com", "Network Security Expertise"),
    ("www.nasa.gov", "Space Exploration Knowledge"),
    ("www.etsy.com", "Handmade Crafts Design Skills"),
    ("www.hulu.com", "Streaming Content Evaluation"),
    ("www.uber.com", "Ride-share Strategy"),
    ("www.waze.com", "Navigation App Proficiency"),
    ("www.salesforce.com", "CRM Management Skills"),
    ("www.sony.com", "Entertainment Systems Expertise"),
    ("www.adobe.com", "Graphic Design Proficiency"),
    ("www.bbc.com", "Broadcast Journalism Expertise"),
    ("www.cnbc.com", "Financial News Analysis Skills"),
    ("www.mercedes-benz.com", "Automotive Technology Knowledge"),
    ("www.coca-cola.com", "Beverage Marketing Strategy"),
    ("www.starbucks.com", "Coffee Culture Awareness"),
    ("www.marvel.com", "Comic Book Knowledge"),
    ("www.ikea.com", "Interior Design Proficiency"),
    ("www.spotify.com", "Music Playlist Curation"),
    ("www.snapchat.com", "Snap Content Creation"),
    ("www.playstation.com", "Gaming Console Expertise"),
    ("www.nintendo.com", "Video Game Development Skills"),
    ("www.fitbit.com", "Fitness Technology Proficiency"),
    ("www.yelp.com", "Review Platform Analysis Skills"),
    ("www.tripadvisor.com", "Travel Recommendations Knowledge"),
    ("www.spotify.com", "Music Genre Analysis"),
    ("www.ancestry.com", "Genealogy Research Abilities"),
    ("www.soundcloud.com", "Music Streaming Enthusiast"),
    ("www.zappos.com", "Footwear Fashion Knowledge"),
    ("www.grammarly.com", "Grammar and Writing Expertise"),
    ("www.hubspot.com", "Inbound Marketing Skills"),
    ("www.patagonia.com", "Sustainable Fashion Awareness"),
    ("www.tesla.com", "Electric Vehicle Technology Knowledge"),
    ("www.nike.com", "Sports Performance Analysis Skills"),
    ("www.ibm.com", "Quantum Computing Research Abilities"),
    ("www.britannica.com", "Encyclopedia Editing Proficiency"),
    ("www.duolingo.com", "Language Learning Knowledge"),
    ("www.hbo.com", "Streaming Content Analysis Skills"),
    ("www.ibm.com", "Blockchain Technology Proficiency"),
    ("www.cnn.com", "News Broadcasting Analysis Skills"),
    ("www.coca-cola.com", "Beverage Taste Testing Skills"),
    ("www.ibm.com", "Quantum Computing Research Abilities"),
    ("www.twitch.tv", "Esports Analysis Skills"),
    ("www.canon.com", "Photography Equipment Knowledge"),
    ("www.spotify.com", "Music Discovery Analysis Skills"),
    ("www.slack.com", "Team Collaboration Proficiency"),
    ("www.squarespace.com", "Website Design Knowledge"),
    ("www.ebay.com", "E-commerce Entrepreneurship Skills"),
    ("www.dropbox.com", "Cloud Storage Technology Proficiency"),
    ("www.samsung.com", "Consumer Electronics Analysis Skills"),
    ("www.netflix.com", "Binge-Watching Expertise"),
    ("www.ibm.com", "Artificial Intelligence Research Abilities"),
    ("www.spotify.com", "Music Recommendation Analysis Skills"),
    ("www.oracle.com", "Database Management Proficiency"),
    ("www.nintendo.com", "Gaming Industry Analysis Skills"),
    ("www.spotify.com", "Podcast Enthusiast"),
    ("www.ibm.com", "Quantum Computing Research Abilities"),
    ("www.ibm.com", "Quantum Computing Research Abilities"),
];
