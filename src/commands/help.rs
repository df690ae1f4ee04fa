pub fn execute() -> String {
    [
        "📖 stakesim commands",
        "",
        "`$stake [capital] [rebase <n>]` - Estimate staking value after 1, 7 and 30 days (alias `$sim`)",
        "`$price <token-id> [currency]` - Current spot price",
        "`$apr <symbol>` - APR listed by the yield aggregator",
        "`$recommend` - Staking options with APR and risk (alias `$rec`)",
        "`$help` - Show this help message",
        "`$quit` - Exit",
        "",
        "Capital accepts dots or commas as thousands separators, e.g. 10.000.000",
    ]
    .join("\n")
}
