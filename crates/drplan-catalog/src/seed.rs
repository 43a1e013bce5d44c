//! Reference data seeded into the store at construction.
//!
//! Identities are assigned sequentially from 1 in the order the records are
//! listed here, so seed order is also wire order for list endpoints.

use crate::model::{
    DownloadableResource, FileAttachment, NewTestimonial, Resource, StrategyComparison,
};

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

fn attachment(id: u32, name: &str, size: &str) -> FileAttachment {
    FileAttachment {
        id,
        name: name.to_string(),
        size: size.to_string(),
    }
}

/// The educational resource catalog.
pub fn resources() -> Vec<Resource> {
    let data = [
        (
            "Disaster Recovery Fundamentals",
            "Learn the basics of disaster recovery planning and implementation for enterprise environments.",
            "<p>This comprehensive guide covers the fundamental principles of disaster recovery planning...</p>",
            "Beginner",
            "Guide",
            4.2,
            42,
            "2023-06-12",
            25,
            "1-2 weeks",
            vec!["Basic IT knowledge", "Familiarity with business operations"],
            vec![
                attachment(1, "DR_Fundamentals_Checklist.pdf", "2.4 MB"),
                attachment(2, "Implementation_Timeline.xlsx", "1.1 MB"),
            ],
        ),
        (
            "Backup Strategy Optimization",
            "Techniques for optimizing backup strategies for various enterprise scenarios.",
            "<p>Learn advanced techniques for optimizing your backup strategies...</p>",
            "Intermediate",
            "Guide",
            4.8,
            28,
            "2023-07-03",
            35,
            "2-4 weeks",
            vec!["Basic backup knowledge", "Some IT infrastructure experience"],
            vec![attachment(3, "Backup_Optimization_Template.docx", "3.2 MB")],
        ),
        (
            "Zero-Downtime Recovery Planning",
            "Advanced techniques for implementing zero-downtime recovery systems in enterprise environments.",
            "<p>Explore cutting-edge techniques for ensuring zero-downtime in your recovery operations...</p>",
            "Advanced",
            "Guide",
            4.9,
            16,
            "2023-08-17",
            45,
            "1-3 months",
            vec![
                "Advanced IT knowledge",
                "Experience with high-availability systems",
                "Previous DR implementation",
            ],
            vec![
                attachment(4, "Zero_Downtime_Architecture.pdf", "5.7 MB"),
                attachment(5, "Implementation_Guide.pdf", "8.2 MB"),
            ],
        ),
        (
            "Backup Terminology Guide",
            "A comprehensive guide to understanding backup and recovery terminology.",
            "<p>Master the language of backup and recovery with this comprehensive terminology guide...</p>",
            "Beginner",
            "Guide",
            3.8,
            31,
            "2023-05-22",
            15,
            "N/A",
            vec!["None"],
            vec![attachment(6, "Backup_Glossary.pdf", "1.3 MB")],
        ),
        (
            "Cloud-Based Recovery Solutions",
            "Implementation guide for cloud-based disaster recovery solutions.",
            "<p>Discover how to leverage cloud platforms for reliable disaster recovery...</p>",
            "Intermediate",
            "Guide",
            4.5,
            19,
            "2023-07-19",
            30,
            "3-5 weeks",
            vec!["Cloud platform familiarity", "Basic networking knowledge"],
            vec![attachment(7, "Cloud_DR_Checklist.pdf", "2.8 MB")],
        ),
        (
            "Multi-Site Recovery Architecture",
            "Advanced architectural patterns for multi-site disaster recovery implementations.",
            "<p>Learn how to design and implement sophisticated multi-site recovery solutions...</p>",
            "Advanced",
            "Case Study",
            5.0,
            24,
            "2023-08-05",
            50,
            "2-4 months",
            vec![
                "Enterprise architecture experience",
                "Advanced networking",
                "Multiple DC management",
            ],
            vec![
                attachment(8, "Architecture_Diagrams.pdf", "7.4 MB"),
                attachment(9, "Implementation_Roadmap.xlsx", "2.1 MB"),
            ],
        ),
    ];

    data.into_iter()
        .enumerate()
        .map(
            |(
                i,
                (
                    title,
                    description,
                    content,
                    skill_level,
                    kind,
                    average_rating,
                    review_count,
                    last_updated,
                    reading_time,
                    implementation_time,
                    prerequisites,
                    downloadable_files,
                ),
            )| Resource {
                id: i as u32 + 1,
                title: title.to_string(),
                description: description.to_string(),
                content: content.to_string(),
                skill_level: skill_level.to_string(),
                kind: kind.to_string(),
                average_rating,
                review_count,
                last_updated: last_updated.to_string(),
                reading_time,
                implementation_time: implementation_time.to_string(),
                prerequisites: strings(&prerequisites),
                downloadable_files,
            },
        )
        .collect()
}

/// The strategy comparison matrix rows.
pub fn strategy_comparisons() -> Vec<StrategyComparison> {
    let data = [
        ("Local Backup", "1-4 hours", "24 hours", 1, 1),
        ("Cloud Backup", "2-8 hours", "12 hours", 2, 2),
        ("Hybrid Solution", "1-4 hours", "6 hours", 3, 3),
        ("Continuous Replication", "Minutes", "Near zero", 3, 3),
    ];

    data.into_iter()
        .enumerate()
        .map(|(i, (name, rto, rpo, cost, complexity))| StrategyComparison {
            id: i as u32 + 1,
            name: name.to_string(),
            rto: rto.to_string(),
            rpo: rpo.to_string(),
            cost,
            complexity,
        })
        .collect()
}

/// The downloadable asset list.
pub fn downloadable_resources() -> Vec<DownloadableResource> {
    let data = [
        (
            "Backup Strategy Template",
            "Editable template for creating a comprehensive backup strategy document.",
            "Template",
            "/downloads/backup-strategy-template.docx",
        ),
        (
            "TCO Calculator",
            "Excel-based calculator for estimating total cost of ownership for backup solutions.",
            "Calculator",
            "/downloads/tco-calculator.xlsx",
        ),
        (
            "Risk Assessment Form",
            "Form template for conducting disaster recovery risk assessments.",
            "Form",
            "/downloads/risk-assessment-form.pdf",
        ),
        (
            "Testing Schedule Guide",
            "Guide for creating and maintaining a backup testing schedule.",
            "Guide",
            "/downloads/testing-schedule-guide.pdf",
        ),
    ];

    data.into_iter()
        .enumerate()
        .map(|(i, (name, description, kind, download_url))| DownloadableResource {
            id: i as u32 + 1,
            name: name.to_string(),
            description: description.to_string(),
            kind: kind.to_string(),
            download_url: download_url.to_string(),
        })
        .collect()
}

/// Initial testimonials. Submission dates are assigned at seed time.
pub fn testimonials() -> Vec<NewTestimonial> {
    let data = [
        (
            "Michael Chen",
            "TechSolutions Inc.",
            5,
            "The disaster recovery resources provided by DisasterReady helped us implement a robust backup strategy that saved our data during a recent outage. The step-by-step guides were invaluable.",
        ),
        (
            "Sarah Johnson",
            "Healthcare Partners",
            4,
            "The comparison matrix helped us make an informed decision about which backup strategy would work best for our organization. We were able to clearly see the trade-offs between different approaches.",
        ),
        (
            "David Rodriguez",
            "Global Finance",
            5,
            "As someone new to disaster recovery planning, the beginner resources were exactly what I needed. The interactive planning tool generated a strategy that our management team approved immediately.",
        ),
    ];

    data.into_iter()
        .map(|(name, company, rating, comment)| NewTestimonial {
            name: name.to_string(),
            company: company.to_string(),
            rating,
            comment: comment.to_string(),
        })
        .collect()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SKILL_LEVELS;

    #[test]
    fn test_seed_counts() {
        assert_eq!(resources().len(), 6);
        assert_eq!(strategy_comparisons().len(), 4);
        assert_eq!(downloadable_resources().len(), 4);
        assert_eq!(testimonials().len(), 3);
    }

    #[test]
    fn test_resource_ids_are_sequential_from_one() {
        let ids: Vec<u32> = resources().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_resource_tags_are_well_formed() {
        for resource in resources() {
            assert!(
                SKILL_LEVELS.contains(&resource.skill_level.as_str()),
                "unexpected skill level {:?}",
                resource.skill_level
            );
            assert!((0.0..=5.0).contains(&resource.average_rating));
        }
    }

    #[test]
    fn test_attachment_ids_unique_across_resources() {
        let mut seen = std::collections::HashSet::new();
        for resource in resources() {
            for file in &resource.downloadable_files {
                assert!(seen.insert(file.id), "duplicate attachment id {}", file.id);
            }
        }
    }

    #[test]
    fn test_comparison_tiers_in_range() {
        for row in strategy_comparisons() {
            assert!((1..=3).contains(&row.cost));
            assert!((1..=3).contains(&row.complexity));
        }
    }

    #[test]
    fn test_seed_testimonial_ratings_in_range() {
        for t in testimonials() {
            assert!((1..=5).contains(&t.rating));
        }
    }
}
