use tracing::Instrument;
use uuid::Uuid;

use crate::config::DEFAULT_CAPITAL;
use crate::context::AppContext;
use crate::models::{SimulationReport, TokenReport, YieldSpec};
use crate::services::recommendation_service::render_recommendations;
use crate::services::simulation_service::run_simulation;
use crate::utils::{format_currency, format_percent, AppError};

pub async fn execute(ctx: &AppContext, args: &[&str]) -> Result<String, AppError> {
    let (capital_text, rebase) = parse_args(args)?;

    let request_id = Uuid::new_v4();
    let span = tracing::info_span!("stake", %request_id);

    async move {
        tracing::info!("💹 Stake simulation requested for '{}'", capital_text);
        let report = run_simulation(ctx, capital_text, rebase).await?;
        Ok::<_, AppError>(render_report(&report))
    }
    .instrument(span)
    .await
}

/// `<capital> [rebase <n>]`, capital defaulting to 10.000.000
fn parse_args<'a>(args: &[&'a str]) -> Result<(&'a str, Option<u32>), AppError> {
    let capital = args.first().copied().unwrap_or(DEFAULT_CAPITAL);

    let rebase = match args.get(1..).unwrap_or(&[]) {
        [] => None,
        [flag, count] if flag.eq_ignore_ascii_case("rebase") || *flag == "--rebase" => {
            match count.parse::<u32>() {
                Ok(n) if n > 0 => Some(n),
                _ => {
                    return Err(AppError::InvalidArguments(format!(
                        "Rebase count must be a positive integer (got '{}')",
                        count
                    )))
                }
            }
        }
        _ => {
            return Err(AppError::InvalidArguments(
                "Usage: `$stake <capital> [rebase <n>]`".to_string(),
            ))
        }
    };

    Ok((capital, rebase))
}

fn describe_yield(spec: &YieldSpec) -> String {
    match spec {
        YieldSpec::Apr { annual_percent } => {
            format!("daily compounding at {} APR", format_percent(*annual_percent))
        }
        YieldSpec::Rebase { annual_percent, rebases_per_day } => format!(
            "{} rebases/day at {} APR",
            rebases_per_day,
            format_percent(*annual_percent)
        ),
    }
}

fn render_token(out: &mut String, token: &TokenReport, symbol: &str) {
    out.push_str(&format!("\n🔷 {} staking estimate ({})\n", token.symbol, describe_yield(&token.yield_spec)));
    if let Some(first) = token.projections.first() {
        out.push_str(&format!("Staked: {:.4} {}\n", first.principal, token.symbol));
    }
    for projection in &token.projections {
        let unit = if projection.horizon_days == 1 { "day" } else { "days" };
        out.push_str(&format!(
            "After {} {}: {} ({:.4} {})\n",
            projection.horizon_days,
            unit,
            format_currency(projection.projected_fiat_value, symbol),
            projection.projected_tokens,
            token.symbol,
        ));
    }
    if let Some(note) = &token.risk_note {
        out.push_str(&format!("⚠️ {} risk ({}): {}\n", token.symbol, token.risk, note));
    }
}

pub fn render_report(report: &SimulationReport) -> String {
    let symbol = report.currency_symbol.as_str();
    let mut out = String::new();

    out.push_str(&format!("Capital: {}\n", format_currency(report.capital as f64, symbol)));
    for token in &report.tokens {
        out.push_str(&format!("💰 {} price: {}\n", token.symbol, format_currency(token.price, symbol)));
    }

    let apr_line: Vec<String> = report
        .tokens
        .iter()
        .map(|t| {
            let marker = if t.apr.from_fallback { " (default)" } else { "" };
            format!("APR {}: {}{}", t.symbol, format_percent(t.apr.apr), marker)
        })
        .collect();
    out.push_str(&format!("📡 {}\n", apr_line.join(" | ")));

    for token in &report.tokens {
        render_token(&mut out, token, symbol);
    }

    out.push_str("\n📊 Top staking options\n");
    out.push_str(&render_recommendations(&report.recommendations));
    out.push_str(&format!(
        "\nPrices from CoinGecko ({}) as of {}. APR from DefiLlama and platform pages. For education only, not financial advice.",
        report.currency.to_uppercase(),
        report.fetched_at.format("%Y-%m-%d %H:%M UTC"),
    ));

    out
}
