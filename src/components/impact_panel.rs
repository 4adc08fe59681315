//! Impact figures for one role.

use access::Role;
use leptos::prelude::*;

use crate::components::stat_card::{ProgressBar, StatCard};
use crate::state::impact::{ImpactStats, MonthlyImpact};

#[component]
pub fn ImpactPanel(role: Role) -> impl IntoView {
    let stats = ImpactStats::for_role(role);
    let exchanges_label = match role {
        Role::Donor => "Total donations",
        Role::Recipient => "Pickups received",
    };
    let progress = stats.progress_percent();
    let goal_text = format!("{} of {} people this week", stats.people_fed_this_week, stats.weekly_goal);

    let months = stats
        .monthly
        .iter()
        .map(|m: &MonthlyImpact| {
            let share = stats.month_share(m);
            view! {
                <li class="impact__month">
                    <span class="impact__month-label">{m.month}</span>
                    <ProgressBar percent=Signal::stored(share)/>
                    <span class="impact__month-value">{format!("{} people fed", m.people_fed)}</span>
                </li>
            }
        })
        .collect_view();

    view! {
        <section class="impact">
            <div class="stat-grid">
                <StatCard label=exchanges_label value=stats.total_exchanges.to_string()/>
                <StatCard label="People fed" value=stats.people_fed.to_string()/>
                <StatCard label="Food saved" value=format!("{} kg", stats.food_saved_kg)/>
                <StatCard label="CO₂ reduced" value=format!("{} kg", stats.co2_reduced_kg)/>
            </div>
            <div class="impact__goal">
                <h2>"Weekly Goal Progress"</h2>
                <ProgressBar percent=Signal::stored(progress)/>
                <p>{format!("{progress}% · {goal_text}")}</p>
            </div>
            <div class="impact__monthly">
                <h2>"Monthly Impact"</h2>
                <ul>{months}</ul>
            </div>
        </section>
    }
}
