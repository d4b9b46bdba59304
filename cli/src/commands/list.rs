use colored::*;
use nounwind_common::config::Config;
use nounwind_core::scenario::Scenario;

use crate::terminal::print;

type Detail = (String, ColoredString);

pub fn list(cfg: &Config) {
    for (idx, scenario) in Scenario::ALL.into_iter().enumerate() {
        print::tree_head(idx, scenario.name());

        if cfg.quiet >= 2 {
            continue;
        }

        let details: Vec<Detail> = vec![
            ("entry".to_string(), scenario.entry_function().cyan()),
            ("contract".to_string(), scenario.contract().normal()),
            (
                "promise".to_string(),
                scenario.expectation().to_string().yellow(),
            ),
            ("about".to_string(), scenario.description().normal()),
        ];
        print::as_tree_one_level(details);
    }
}
