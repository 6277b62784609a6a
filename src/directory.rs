use anyhow::bail;

use crate::models::DoctorResult;

/// Boundary to the doctor-search service. Implementations resolve a single
/// query into results or an error; the curation core only ever sees the
/// resolved list.
pub trait DoctorDirectory {
    fn search(&self, query: &str) -> anyhow::Result<Vec<DoctorResult>>;
}

/// Built-in stand-in for the remote places lookup, keyed by area name.
pub struct SampleDirectory;

impl DoctorDirectory for SampleDirectory {
    fn search(&self, query: &str) -> anyhow::Result<Vec<DoctorResult>> {
        if query.trim().is_empty() {
            bail!("Please enter a location to search");
        }

        let needle = query.trim().to_lowercase();
        let results: Vec<DoctorResult> = listings()
            .into_iter()
            .filter(|(area, _)| area.to_lowercase().contains(&needle))
            .map(|(_, doctor)| doctor)
            .collect();

        if results.is_empty() {
            bail!("No doctors found in this area");
        }
        Ok(results)
    }
}

fn listings() -> Vec<(&'static str, DoctorResult)> {
    let rows = [
        ("Mumbai", 1, "Dr. Meera Shah", "Gynecologist", 4.8, 215),
        ("Mumbai", 2, "Dr. Anjali Deshpande", "Women's Health Specialist", 4.6, 142),
        ("Delhi", 3, "Dr. Kavita Rao", "Gynecologist", 4.7, 198),
        ("Delhi", 4, "Dr. Sunita Verma", "Women's Health Specialist", 4.5, 0),
        ("Bangalore", 5, "Dr. Priya Nair", "Gynecologist", 4.9, 301),
    ];

    rows.into_iter()
        .map(|(area, id, name, specialization, rating, review_count)| {
            (
                area,
                DoctorResult {
                    id,
                    name: name.to_string(),
                    specialization: specialization.to_string(),
                    rating,
                    review_count,
                },
            )
        })
        .collect()
}
