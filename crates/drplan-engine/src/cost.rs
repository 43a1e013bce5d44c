//! Backup-solution cost estimation.
//!
//! [`estimate`] prices a backup configuration from closed lookup tables:
//! regional multipliers, backup frequency implied by the RPO, recovery
//! infrastructure implied by the RTO, a backup-type base cost, tiered
//! storage distribution, and volume discounts. All tables are closed -
//! an unrecognized label is a validation error, not a silent zero.

use drplan_core::{validate, Error, Result};
use serde::{Deserialize, Serialize};

/// RPO labels with a priced backup frequency.
pub const RPO_LABELS: [&str; 7] = ["24h", "12h", "6h", "1h", "15m", "5m", "0m"];

/// RTO labels with a priced infrastructure multiplier.
pub const RTO_LABELS: [&str; 7] = ["72h", "48h", "24h", "8h", "4h", "1h", "0h"];

/// Priced backup solution types.
pub const BACKUP_TYPES: [&str; 4] = ["local", "cloud", "hybrid", "multicloud"];

/// Priced deployment regions.
pub const REGIONS: [&str; 6] = [
    "us-east",
    "us-west",
    "eu-central",
    "eu-west",
    "ap-east",
    "ap-south",
];

/// Which cost components count toward the total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostToggles {
    /// Include storage costs.
    #[serde(default = "default_true")]
    pub storage: bool,
    /// Include backup processing costs.
    #[serde(default = "default_true")]
    pub backup: bool,
    /// Include recovery infrastructure costs.
    #[serde(default = "default_true")]
    pub recovery: bool,
    /// Include network egress costs.
    #[serde(default = "default_true")]
    pub network: bool,
    /// Include support and maintenance costs.
    #[serde(default = "default_true")]
    pub support: bool,
}

fn default_true() -> bool {
    true
}

impl Default for CostToggles {
    fn default() -> Self {
        Self {
            storage: true,
            backup: true,
            recovery: true,
            network: true,
            support: true,
        }
    }
}

/// A cost-estimation request. Ephemeral - never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostRequest {
    /// Protected data volume in gigabytes.
    pub data_volume_gb: f64,
    /// Backup retention period in days.
    pub retention_days: u32,
    /// Recovery point objective, one of [`RPO_LABELS`].
    pub rpo: String,
    /// Recovery time objective, one of [`RTO_LABELS`].
    pub rto: String,
    /// Backup solution type, one of [`BACKUP_TYPES`].
    pub backup_type: String,
    /// Deployment region, one of [`REGIONS`].
    pub region: String,
    /// Component toggles; everything included by default.
    #[serde(default)]
    pub include: CostToggles,
}

/// Data spread across one storage tier.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageTier {
    /// Tier name, e.g. "Hot Storage".
    pub tier: String,
    /// Price per gigabyte per month.
    pub cost_per_gb: f64,
    /// Gigabytes assigned to this tier.
    pub amount_gb: f64,
}

/// One line of the cost breakdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CostLineItem {
    /// Component name.
    pub name: String,
    /// What the component covers.
    pub description: String,
    /// Base monthly amount, before discount, even when excluded.
    pub monthly: f64,
    /// Base yearly amount.
    pub yearly: f64,
    /// Whether the component counts toward the totals.
    pub enabled: bool,
}

/// A complete cost estimate. Derived - never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CostEstimate {
    /// How the data volume spreads across storage tiers.
    pub storage_tiers: Vec<StorageTier>,
    /// Per-component breakdown, fixed order.
    pub line_items: Vec<CostLineItem>,
    /// Volume discount applied to the totals, in percent.
    pub volume_discount_percent: f64,
    /// Monthly total over enabled components, after discount.
    pub monthly_total: f64,
    /// Yearly total over enabled components, after discount.
    pub yearly_total: f64,
}

fn region_multiplier(region: &str) -> Option<f64> {
    match region {
        "us-east" => Some(1.0),
        "us-west" => Some(1.05),
        "eu-central" => Some(1.15),
        "eu-west" => Some(1.10),
        "ap-east" => Some(1.20),
        "ap-south" => Some(1.15),
        _ => None,
    }
}

fn backups_per_day(rpo: &str) -> Option<f64> {
    match rpo {
        "24h" => Some(1.0),
        "12h" => Some(2.0),
        "6h" => Some(4.0),
        "1h" => Some(24.0),
        "15m" => Some(96.0),
        "5m" => Some(288.0),
        // "Continuous" (approx. every 10 seconds)
        "0m" => Some(8640.0),
        _ => None,
    }
}

fn rto_infra_multiplier(rto: &str) -> Option<f64> {
    match rto {
        "72h" => Some(0.5),
        "48h" => Some(0.7),
        "24h" => Some(0.9),
        "8h" => Some(1.2),
        "4h" => Some(1.5),
        "1h" => Some(2.0),
        "0h" => Some(3.0),
        _ => None,
    }
}

/// (multiplier, monthly base cost) per backup type.
fn backup_type_pricing(backup_type: &str) -> Option<(f64, f64)> {
    match backup_type {
        "local" => Some((0.8, 50.0)),
        "cloud" => Some((1.0, 200.0)),
        "hybrid" => Some((1.2, 300.0)),
        "multicloud" => Some((1.5, 500.0)),
        _ => None,
    }
}

const HOT_PER_GB: f64 = 0.023;
const WARM_PER_GB: f64 = 0.015;
const COLD_PER_GB: f64 = 0.004;
const ARCHIVE_PER_GB: f64 = 0.001;

/// Split the data volume across storage tiers.
///
/// The base split follows the retention period (longer retention pushes
/// data toward cold tiers); fast RTOs pull it back toward hot storage.
/// Shares are floored at zero and renormalized to sum to one.
fn storage_distribution(volume_gb: f64, retention_days: u32, rto: &str) -> Vec<StorageTier> {
    let (mut hot, mut warm, mut cold, mut archive): (f64, f64, f64, f64) = match retention_days {
        0..=7 => (0.6, 0.3, 0.1, 0.0),
        8..=30 => (0.3, 0.4, 0.2, 0.1),
        31..=90 => (0.2, 0.3, 0.3, 0.2),
        _ => (0.1, 0.2, 0.3, 0.4),
    };

    match rto {
        "0h" | "1h" => {
            hot += 0.2;
            warm += 0.1;
            cold -= 0.1;
            archive -= 0.2;
        }
        "4h" => {
            hot += 0.1;
            warm += 0.1;
            cold -= 0.1;
            archive -= 0.1;
        }
        _ => {}
    }

    cold = cold.max(0.0);
    archive = archive.max(0.0);

    let total = hot + warm + cold + archive;
    hot /= total;
    warm /= total;
    cold /= total;
    archive /= total;

    let tier = |name: &str, cost_per_gb: f64, share: f64| StorageTier {
        tier: name.to_string(),
        cost_per_gb,
        amount_gb: (volume_gb * share).round(),
    };

    vec![
        tier("Hot Storage", HOT_PER_GB, hot),
        tier("Warm Storage", WARM_PER_GB, warm),
        tier("Cold Storage", COLD_PER_GB, cold),
        tier("Archive Storage", ARCHIVE_PER_GB, archive),
    ]
}

/// Volume discount as a fraction, stepped at 10 TB, 50 TB, and 100 TB.
fn volume_discount(volume_gb: f64) -> f64 {
    if volume_gb >= 100_000.0 {
        0.20
    } else if volume_gb >= 50_000.0 {
        0.15
    } else if volume_gb >= 10_000.0 {
        0.10
    } else {
        0.0
    }
}

/// Price a backup configuration.
///
/// # Errors
///
/// Returns a validation error naming the field when the data volume is not
/// a positive number or when any label falls outside its priced table.
pub fn estimate(request: &CostRequest) -> Result<CostEstimate> {
    if !request.data_volume_gb.is_finite() || request.data_volume_gb <= 0.0 {
        return Err(Error::validation_field(
            "dataVolumeGb",
            "must be a positive number of gigabytes",
        ));
    }
    validate::one_of("rpo", &request.rpo, &RPO_LABELS)?;
    validate::one_of("rto", &request.rto, &RTO_LABELS)?;
    validate::one_of("backupType", &request.backup_type, &BACKUP_TYPES)?;
    validate::one_of("region", &request.region, &REGIONS)?;

    let volume = request.data_volume_gb;
    // Lookups cannot fail past the label validation above
    let region_mult = region_multiplier(&request.region).unwrap_or(1.0);
    let frequency = backups_per_day(&request.rpo).unwrap_or(1.0);
    let rto_mult = rto_infra_multiplier(&request.rto).unwrap_or(1.0);
    let (type_mult, base_cost) = backup_type_pricing(&request.backup_type).unwrap_or((1.0, 0.0));

    let storage_tiers = storage_distribution(volume, request.retention_days, &request.rto);
    let storage_cost: f64 = storage_tiers
        .iter()
        .map(|t| t.amount_gb * t.cost_per_gb)
        .sum::<f64>()
        * region_mult;

    let backup_cost = base_cost * type_mult * (frequency / 24.0) * (volume / 100.0).log10();
    let recovery_cost = 200.0 * rto_mult * (volume / 1000.0);
    // Assume 10% of data is transferred out monthly
    let network_cost = 0.08 * (volume * 0.1);
    let support_cost = 100.0 + 0.05 * (backup_cost + recovery_cost);

    let item = |name: &str, description: String, monthly: f64, enabled: bool| CostLineItem {
        name: name.to_string(),
        description,
        monthly,
        yearly: monthly * 12.0,
        enabled,
    };

    let include = &request.include;
    let line_items = vec![
        item(
            "Storage Costs",
            "Cost of storing your backup data across different storage tiers".to_string(),
            storage_cost,
            include.storage,
        ),
        item(
            "Backup Processing",
            format!("Cost of performing backups at your selected RPO ({})", request.rpo),
            backup_cost,
            include.backup,
        ),
        item(
            "Recovery Infrastructure",
            format!("Infrastructure required to meet your RTO of {}", request.rto),
            recovery_cost,
            include.recovery,
        ),
        item(
            "Network Costs",
            "Cost of data transfer during backup and recovery operations".to_string(),
            network_cost,
            include.network,
        ),
        item(
            "Support & Maintenance",
            "Ongoing support and maintenance of your backup solution".to_string(),
            support_cost,
            include.support,
        ),
    ];

    let discount = volume_discount(volume);
    let monthly_total: f64 = line_items
        .iter()
        .filter(|i| i.enabled)
        .map(|i| i.monthly)
        .sum::<f64>()
        * (1.0 - discount);
    let yearly_total = monthly_total * 12.0;

    Ok(CostEstimate {
        storage_tiers,
        line_items,
        volume_discount_percent: discount * 100.0,
        monthly_total,
        yearly_total,
    })
}

// ============================================================================
// Tests
// ============================================================================
