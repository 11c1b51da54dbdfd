//! Print a two-model comparison table to stdout.

use regtablib::{generate_table, ModelResults, Parens, SummaryStat, TableOptions};

fn main() {
    let bivariate = ModelResults::new()
        .named("Bivariate")
        .variable("const", -0.905, 0.685, 0.187)
        .variable("educ", 0.541, 0.053, 0.0001)
        .stat(SummaryStat::Nobs, 526.0)
        .stat(SummaryStat::RSquared, 0.165);

    let controls = ModelResults::new()
        .named("Controls")
        .variable("const", -3.391, 0.767, 0.0001)
        .variable("educ", 0.644, 0.054, 0.0001)
        .variable("exper", 0.070, 0.011, 0.0001)
        .stat(SummaryStat::Nobs, 526.0)
        .stat(SummaryStat::RSquared, 0.225);

    let options = TableOptions::new()
        .caption("Hourly wage regressions")
        .label("tab:wage")
        .parens(Parens::StdErr)
        .rename("const", "Intercept")
        .summary_stats(vec![SummaryStat::Nobs, SummaryStat::RSquared]);

    match generate_table(&[bivariate, controls], &options) {
        Ok(latex) => print!("{}", latex),
        Err(e) => eprintln!("Error: {e}"),
    }
}
