use tracing::debug;

use crate::models::{RecommendationRow, ResolvedApr, StakingToken};
use crate::services::rate_service::{fetch_aprs, resolve_aprs, AprSources};
use crate::utils::{format_percent, Table};

/// Pair catalog entries with their resolved APRs, keeping catalog order
pub fn build_recommendations(tokens: &[StakingToken], aprs: &[ResolvedApr]) -> Vec<RecommendationRow> {
    tokens
        .iter()
        .filter_map(|token| {
            let resolved = aprs.iter().find(|a| a.symbol == token.symbol)?;
            Some(RecommendationRow {
                token: token.symbol.clone(),
                platform: token.platform.clone(),
                apr: resolved.apr,
                risk: token.risk,
            })
        })
        .collect()
}

/// Fetch APRs for `tokens` and build the comparison rows
pub async fn get_recommendations(sources: &AprSources, tokens: &[StakingToken]) -> Vec<RecommendationRow> {
    let fetched = fetch_aprs(sources, tokens).await;
    let resolved = resolve_aprs(tokens, &fetched);
    debug!("Resolved {} recommendation APRs", resolved.len());
    build_recommendations(tokens, &resolved)
}

pub fn render_recommendations(rows: &[RecommendationRow]) -> String {
    let mut table = Table::new(&["Token", "Platform", "APR", "Risk"]);
    for row in rows {
        table.add_row(&[
            row.token.clone(),
            row.platform.clone(),
            format_percent(row.apr),
            row.risk.to_string(),
        ]);
    }
    table.render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{catalog, AppConfig};
    use crate::models::RiskTier;
    use crate::services::rate_service::tests::static_sources;

    #[tokio::test]
    async fn test_recommendations_use_fallbacks_for_missing_aprs() {
        let tokens = catalog::recommendation_tokens(&AppConfig::default());
        let sources = static_sources(&[("AXS", 31.25), ("ATOM", 0.0)]);

        let rows = get_recommendations(&sources, &tokens).await;
        let aprs: Vec<(&str, f64)> = rows.iter().map(|r| (r.token.as_str(), r.apr)).collect();
        assert_eq!(
            aprs,
            vec![("LGNS", 100.0), ("AXS", 31.25), ("ATOM", 19.0), ("OSMO", 22.0), ("stETH", 3.6)]
        );
        assert_eq!(rows[4].risk, RiskTier::Low);
        assert_eq!(rows[0].platform, "Origin DeFi");
    }

    #[test]
    fn test_render_recommendations() {
        let rows = vec![
            RecommendationRow { token: "AXS".into(), platform: "Stake.axieinfinity.com".into(), apr: 28.0, risk: RiskTier::Moderate },
            RecommendationRow { token: "stETH".into(), platform: "Lido Finance".into(), apr: 3.6, risk: RiskTier::Low },
        ];

        let rendered = render_recommendations(&rows);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("Token | Platform"));
        assert!(lines[2].contains("28.00%") && lines[2].ends_with("Moderate"));
        assert!(lines[3].contains("3.60%") && lines[3].ends_with("Low"));
    }
}
