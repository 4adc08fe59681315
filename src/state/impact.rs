//! Impact figures for the donor and recipient Impact pages and dashboards.

#[cfg(test)]
#[path = "impact_test.rs"]
mod impact_test;

use access::Role;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MonthlyImpact {
    pub month: &'static str,
    pub people_fed: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImpactStats {
    /// Donations made (donor) or pickups received (recipient).
    pub total_exchanges: u32,
    pub people_fed: u32,
    pub food_saved_kg: u32,
    pub co2_reduced_kg: u32,
    pub people_fed_this_week: u32,
    pub weekly_goal: u32,
    pub monthly: Vec<MonthlyImpact>,
}

impl ImpactStats {
    /// Weekly goal progress in `0..=100`. A zero goal reports 0.
    #[must_use]
    pub fn progress_percent(&self) -> u8 {
        if self.weekly_goal == 0 {
            return 0;
        }
        let pct = u64::from(self.people_fed_this_week) * 100 / u64::from(self.weekly_goal);
        u8::try_from(pct.min(100)).unwrap_or(100)
    }

    /// Share of the all-time total contributed by `month`, in `0..=100`.
    #[must_use]
    pub fn month_share(&self, month: &MonthlyImpact) -> u8 {
        if self.people_fed == 0 {
            return 0;
        }
        let pct = u64::from(month.people_fed) * 100 / u64::from(self.people_fed);
        u8::try_from(pct.min(100)).unwrap_or(100)
    }

    #[must_use]
    pub fn for_role(role: Role) -> Self {
        match role {
            Role::Donor => Self {
                total_exchanges: 156,
                people_fed: 2340,
                food_saved_kg: 1250,
                co2_reduced_kg: 3200,
                people_fed_this_week: 156,
                weekly_goal: 200,
                monthly: months(&[("Jan", 675), ("Feb", 780), ("Mar", 720), ("Apr", 840)]),
            },
            Role::Recipient => Self {
                total_exchanges: 156,
                people_fed: 2340,
                food_saved_kg: 5647,
                co2_reduced_kg: 8200,
                people_fed_this_week: 375,
                weekly_goal: 500,
                monthly: months(&[("Jan", 1200), ("Feb", 1500), ("Mar", 1800), ("Apr", 2100)]),
            },
        }
    }
}

fn months(rows: &[(&'static str, u32)]) -> Vec<MonthlyImpact> {
    rows.iter().map(|&(month, people_fed)| MonthlyImpact { month, people_fed }).collect()
}
