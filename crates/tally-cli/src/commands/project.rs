pub fn run(monthly: f64, rate: f64, years: u32) -> Result<(), tally_core::error::TallyError> {
    let total_contributed = monthly * f64::from(years * 12);
    let value = projected_value(monthly, rate, years);

    println!("Monthly contribution:  ${monthly:.2}");
    println!("Annual return:         {rate}%");
    println!("Years:                 {years}");
    println!("Total contributed:     ${total_contributed:.2}");
    println!("Projected value:       ${value:.2}");
    println!("Growth:                ${:.2}", value - total_contributed);

    Ok(())
}

/// Future value of a fixed monthly contribution at a constant annual
/// return rate, compounded monthly.
fn projected_value(monthly: f64, annual_rate_pct: f64, years: u32) -> f64 {
    let monthly_rate = annual_rate_pct / 100.0 / 12.0;
    let months = f64::from(years * 12);

    if monthly_rate == 0.0 {
        return monthly * months;
    }

    monthly * (((1.0 + monthly_rate).powf(months) - 1.0) / monthly_rate)
}
