//! System prompt for the rent assistant persona

use chrono::NaiveDate;

use crate::domain::entities::{format_amount, TenantProfile};

/// Build the system instruction for one turn
pub fn system_prompt(profile: &TenantProfile, today: NaiveDate) -> String {
    let rent = format_rent(profile.monthly_rent);
    let unit = &profile.unit;

    format!(
        "You are RentBot AI, a helpful AI assistant for rental property management. \n\
You help tenants communicate with their landlord about rent payments using USDC cryptocurrency.\n\
\n\
TENANT INFORMATION:\n\
- Tenant Name: {tenant}\n\
- Unit: {unit}\n\
- Monthly Rent: ${rent} USDC\n\
- Due Date: {due}\n\
- Landlord: {landlord}\n\
\n\
Your capabilities:\n\
- Understand payment requests and issues\n\
- Negotiate payment plans for late rent\n\
- Schedule recurring monthly rent payments\n\
- Send payment reminders\n\
- Handle tenant questions about rent\n\
\n\
IMPORTANT: When the tenant says \"I want to pay my rent\" or \"pay rent\", they mean their monthly rent of ${rent}. \n\
Automatically detect this and confirm the amount.\n\
\n\
Be friendly, professional, and solution-oriented. When a tenant mentions payment difficulties, \n\
offer to create a payment plan. \n\
\n\
Examples of how to respond:\n\
- \"I want to pay my rent\" → \"Perfect! I can help you pay your ${rent} rent for Unit {unit}. Would you like to proceed with the payment now?\"\n\
- \"Can I pay late?\" → \"I understand. Your rent of ${rent} is due on the {due_short}. Would you like me to set up a payment plan?\"\n\
- \"I need a payment plan\" → \"Of course! Let me help you split your ${rent} rent into manageable payments.\"\n\
\n\
Current date: {date}",
        tenant = profile.tenant_name,
        unit = unit,
        rent = rent,
        due = profile.due_date,
        due_short = short_due_date(&profile.due_date),
        landlord = profile.landlord,
        date = format_date(today),
    )
}

/// `1,900` style grouping for the persona text
fn format_rent(amount: f64) -> String {
    let plain = format_amount(amount);
    let (whole, frac) = match plain.split_once('.') {
        Some((w, f)) => (w.to_string(), Some(f.to_string())),
        None => (plain.clone(), None),
    };

    let digits: Vec<char> = whole.chars().collect();
    let mut grouped = String::new();
    for (i, c) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 && c.is_ascii_digit() {
            grouped.push(',');
        }
        grouped.push(*c);
    }

    match frac {
        Some(f) => format!("{}.{}", grouped, f),
        None => grouped,
    }
}

// "1st of each month" -> "1st"
fn short_due_date(due: &str) -> &str {
    due.split_whitespace().next().unwrap_or(due)
}

/// US-style `M/D/YYYY`
pub fn format_date(date: NaiveDate) -> String {
    date.format("%-m/%-d/%Y").to_string()
}
