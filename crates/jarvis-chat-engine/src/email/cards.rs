use crate::parsing::fences::{BudgetRow, PauseItem};

/// Width of the dash rule under a card header.
pub const CARD_RULE_WIDTH: usize = 50;

fn header(out: &mut Vec<String>, title: &str) {
    out.push(title.to_string());
    out.push("-".repeat(CARD_RULE_WIDTH));
}

pub(super) fn pause_list(items: &[PauseItem], out: &mut Vec<String>) {
    header(out, "PAUSE RECOMMENDATIONS");
    for (i, item) in items.iter().enumerate() {
        out.push(format!("{}. {}", i + 1, item.ad_name));
        out.push(format!("   Campaign: {}", item.campaign));
        out.push(format!("   Ad Set: {}", item.adset));

        let mut metrics = vec![
            format!("Spend: ${:.2}", item.spend_30d),
            format!("Leads: {}", item.leads_30d),
        ];
        if let Some(cpl) = item.cpl_30d {
            metrics.push(format!("CPL: ${cpl:.2}"));
        }
        if let Some(days) = item.days_running {
            metrics.push(format!("Running: {days}d"));
        }
        out.push(format!("   {}", metrics.join(" | ")));
        out.push(format!("   Reason: {}", item.reason));
        out.push(String::new());
    }
}

pub(super) fn budget_table(rows: &[BudgetRow], out: &mut Vec<String>) {
    header(out, "BUDGET ALLOCATION");
    for row in rows {
        out.push(format!("• {} ({})", row.campaign_tactic, row.platform));
        out.push(format!(
            "  Current: {} → Recommended: {} ({})",
            row.current_spend, row.recommended_spend, row.delta
        ));
        out.push(format!("  {}", row.reasoning));
        out.push(String::new());
    }
}
