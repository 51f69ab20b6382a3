//! Built-in starter corpus for the demo binary and offline operation.
//!
//! Statements are phrased the way a fact-check summary would state them, so
//! the entailment classifier sees complete declarative sentences.

use super::{CorpusRecord, CorpusVerdict};
use crate::hashing::statement_id;

fn record(
    statement: &str,
    verdict: CorpusVerdict,
    source_name: &str,
    source_url: &str,
    category: &str,
) -> CorpusRecord {
    CorpusRecord {
        id: statement_id(statement),
        statement: statement.to_string(),
        verdict,
        source_name: source_name.to_string(),
        source_url: source_url.to_string(),
        category: category.to_string(),
    }
}

/// Returns the starter records.
pub fn starter_records() -> Vec<CorpusRecord> {
    vec![
        record(
            "5G mobile networks cannot spread or transmit coronavirus; viruses do not travel on radio waves or mobile signals.",
            CorpusVerdict::True,
            "World Health Organization",
            "https://www.who.int/emergencies/diseases/novel-coronavirus-2019/advice-for-public/myth-busters",
            "health",
        ),
        record(
            "Vaccines do not cause autism; large studies across multiple countries have found no link between childhood vaccination and autism.",
            CorpusVerdict::True,
            "Centers for Disease Control and Prevention",
            "https://www.cdc.gov/vaccine-safety/about/autism.html",
            "health",
        ),
        record(
            "Global average surface temperature has risen by more than one degree Celsius since the late nineteenth century.",
            CorpusVerdict::True,
            "NASA Climate",
            "https://climate.nasa.gov/evidence/",
            "climate",
        ),
        record(
            "The Great Wall of China is visible to the naked eye from the Moon.",
            CorpusVerdict::False,
            "NASA",
            "https://www.nasa.gov/vision/space/workinginspace/great_wall.html",
            "science",
        ),
        record(
            "Drinking bleach or other disinfectants cures COVID-19.",
            CorpusVerdict::False,
            "World Health Organization",
            "https://www.who.int/emergencies/diseases/novel-coronavirus-2019/advice-for-public",
            "health",
        ),
        record(
            "Humans use only ten percent of their brains.",
            CorpusVerdict::False,
            "Snopes",
            "https://www.snopes.com/fact-check/ten-percent-brain/",
            "science",
        ),
        record(
            "The MMR vaccine causes autism in children.",
            CorpusVerdict::False,
            "FactCheck.org",
            "https://www.factcheck.org/2019/03/no-link-between-mmr-vaccine-autism/",
            "health",
        ),
        record(
            "Regular handwashing with soap reduces the spread of respiratory infections.",
            CorpusVerdict::True,
            "Centers for Disease Control and Prevention",
            "https://www.cdc.gov/clean-hands/about/index.html",
            "health",
        ),
        record(
            "Moderate coffee consumption is associated with both health benefits and health risks depending on dose and population.",
            CorpusVerdict::Mixed,
            "National Institutes of Health",
            "https://www.nih.gov/news-events/nih-research-matters/coffee-health",
            "health",
        ),
        record(
            "Goldfish have a memory span of only three seconds.",
            CorpusVerdict::False,
            "BBC",
            "https://www.bbc.com/future/article/20150114-do-goldfish-have-bad-memories",
            "science",
        ),
        record(
            "Lightning never strikes the same place twice.",
            CorpusVerdict::False,
            "National Weather Service",
            "https://www.weather.gov/safety/lightning-myths",
            "science",
        ),
        record(
            "Eating late at night always causes weight gain regardless of total daily intake.",
            CorpusVerdict::Mixed,
            "National Institutes of Health",
            "https://www.nih.gov/news-events/nih-research-matters/eating-late-weight",
            "health",
        ),
    ]
}
