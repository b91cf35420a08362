//! Robots.txt rule evaluation
//!
//! Allow/Disallow matching is delegated to the `robotstxt` crate; the
//! `Crawl-delay` directive, which that crate does not expose, is read with a
//! small line scanner.

use robotstxt::DefaultMatcher;
use std::time::Duration;

/// Upper bound applied to `Crawl-delay`
pub const MAX_CRAWL_DELAY: Duration = Duration::from_secs(60);

/// Rules from one site's robots.txt
#[derive(Debug, Clone, Default)]
pub struct RobotsRules {
    /// Raw robots.txt content (empty means allow all)
    content: String,
}

impl RobotsRules {
    /// Creates rules from raw robots.txt content
    pub fn from_content(content: &str) -> Self {
        Self {
            content: content.to_string(),
        }
    }

    /// Rules that allow everything, used when robots.txt is unavailable
    pub fn allow_all() -> Self {
        Self::default()
    }

    /// Checks if a URL is allowed for the given agent token
    ///
    /// # Arguments
    ///
    /// * `url` - Absolute URL or path to check
    /// * `agent` - Product token of the crawler (e.g. "WebPilotBot")
    pub fn is_allowed(&self, url: &str, agent: &str) -> bool {
        if self.content.trim().is_empty() {
            return true;
        }

        let mut matcher = DefaultMatcher::default();
        matcher.one_agent_allowed_by_robots(&self.content, agent, url)
    }

    /// Gets the crawl delay that applies to `agent`
    ///
    /// A group naming the agent takes precedence over the `*` group.
    /// Negative and non-numeric values are ignored; larger values are capped
    /// at [`MAX_CRAWL_DELAY`].
    pub fn crawl_delay(&self, agent: &str) -> Option<Duration> {
        let normalized_agent = agent.to_lowercase();

        let mut group_agents: Vec<String> = Vec::new();
        let mut in_agent_lines = false;
        let mut wildcard_delay: Option<f64> = None;
        let mut agent_delay: Option<f64> = None;

        for line in self.content.lines() {
            let line = line.split('#').next().unwrap_or_default().trim();
            let Some((key, value)) = line.split_once(':') else {
                continue;
            };

            let value = value.trim();
            match key.trim().to_lowercase().as_str() {
                "user-agent" => {
                    // Consecutive User-agent lines share one group
                    if !in_agent_lines {
                        group_agents.clear();
                    }
                    group_agents.push(value.to_lowercase());
                    in_agent_lines = true;
                }
                "crawl-delay" => {
                    in_agent_lines = false;
                    let Ok(delay) = value.parse::<f64>() else {
                        continue;
                    };
                    if !delay.is_finite() || delay < 0.0 {
                        continue;
                    }

                    if group_agents
                        .iter()
                        .any(|ua| ua != "*" && normalized_agent.contains(ua.as_str()))
                    {
                        agent_delay = Some(delay);
                    } else if group_agents.iter().any(|ua| ua == "*") {
                        wildcard_delay = Some(delay);
                    }
                }
                _ => in_agent_lines = false,
            }
        }

        agent_delay
            .or(wildcard_delay)
            .map(|secs| Duration::try_from_secs_f64(secs).unwrap_or(MAX_CRAWL_DELAY))
            .map(|delay| delay.min(MAX_CRAWL_DELAY))
    }
}
