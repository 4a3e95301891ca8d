//! The hardcoded provider dataset.

use std::sync::OnceLock;

use crate::models::{AvailabilityItem, GalleryImage, Provider, ProviderType};

/// Specialities offered in the search picker.
pub const SPECIALITIES: &[&str] = &[
    "Cardiologist",
    "Dermatologist",
    "Endocrinologist",
    "Gastroenterologist",
    "Hematologist",
    "Immunologist",
    "Nephrologist",
    "Neurologist",
    "Oncologist",
    "Ophthalmologist",
    "Orthopedic Surgeon",
    "Otolaryngologist",
    "Pediatrician",
    "Psychiatrist",
    "Pulmonologist",
    "Radiologist",
    "Rheumatologist",
    "Urologist",
    "General Practitioner",
    "Dentist",
    "Surgeon",
    "Anesthesiologist",
    "Pathologist",
    "Obstetrician",
    "Gynecologist",
    "Allergist",
    "Infectious Disease Specialist",
    "Plastic Surgeon",
    "Geriatrician",
    "Family Medicine",
    "Sports Medicine",
    "Emergency Medicine",
    "Internal Medicine",
    "Occupational Medicine",
    "Pain Management",
    "Podiatrist",
    "Sleep Medicine",
    "Vascular Surgeon",
    "Geneticist",
    "Nuclear Medicine",
    "Rehabilitation Medicine",
    "Public Health",
    "Other",
];

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn day(day: &str, slots: &[&str]) -> AvailabilityItem {
    AvailabilityItem {
        day: day.to_string(),
        slots: strings(slots),
    }
}

fn image(src: &str, alt: &str) -> GalleryImage {
    GalleryImage {
        src: src.to_string(),
        alt: alt.to_string(),
    }
}

fn build_catalog() -> Vec<Provider> {
    vec![
        Provider {
            id: "1".to_string(),
            name: "Dr. Priya Sharma".to_string(),
            provider_type: ProviderType::Doctor,
            speciality: "Cardiologist".to_string(),
            experience: "15 Years".to_string(),
            qualifications: "MBBS, MD (Cardiology), FACC".to_string(),
            image: "https://images.unsplash.com/photo-1511174511562-5f97f4f4eab6?auto=format&fit=crop&w=400&q=80".to_string(),
            bio: "Dr. Priya Sharma is a renowned cardiologist with over 15 years of experience in treating complex heart conditions. She is known for her patient-centric approach and dedication to providing the highest quality care.".to_string(),
            rating: 4.8,
            reviews_count: 120,
            consultation_fee: "₹1200".to_string(),
            languages: strings(&["English", "Hindi", "Marathi"]),
            clinic_name: "HeartCare Clinic".to_string(),
            location: "Mumbai".to_string(),
            address: "12B, Health Avenue, Andheri West, Mumbai, Maharashtra 400058".to_string(),
            phone: "+91 98765 43210".to_string(),
            email: "dr.priya.sharma@heartcare.com".to_string(),
            availability: vec![
                day("Mon", &["10:00 AM - 1:00 PM", "4:00 PM - 7:00 PM"]),
                day("Tue", &["11:00 AM - 2:00 PM"]),
                day("Wed", &["10:00 AM - 1:00 PM", "3:00 PM - 6:00 PM"]),
                day("Thu", &["02:00 PM - 05:00 PM"]),
                day("Fri", &["4:00 PM - 7:00 PM", "09:00 AM - 12:00 PM"]),
            ],
            services: strings(&["ECG", "Echocardiogram", "Stress Test", "Angioplasty Consultation", "Preventive Cardiology"]),
            gallery: vec![
                image("https://placehold.co/600x400.png", "Clinic Interior"),
                image("https://placehold.co/600x400.png", "Consultation Room"),
            ],
        },
        Provider {
            id: "2".to_string(),
            name: "Apollo Clinic".to_string(),
            provider_type: ProviderType::Clinic,
            speciality: "Multispeciality".to_string(),
            experience: "25 Years".to_string(),
            qualifications: "NABH Accredited".to_string(),
            image: "https://images.unsplash.com/photo-1506744038136-46273834b3fb?auto=format&fit=crop&w=400&q=80".to_string(),
            bio: "Apollo Clinic offers general and specialist consultations, diagnostics and preventive health checks under one roof.".to_string(),
            rating: 4.5,
            reviews_count: 350,
            consultation_fee: "₹800".to_string(),
            languages: strings(&["English", "Hindi", "Punjabi"]),
            clinic_name: "Apollo Clinic".to_string(),
            location: "Delhi".to_string(),
            address: "Plot 7, Sector 12, Dwarka, New Delhi, Delhi 110075".to_string(),
            phone: "+91 98110 22334".to_string(),
            email: "dwarka@apolloclinic.example".to_string(),
            availability: vec![
                day("Mon", &["09:00 AM - 1:00 PM", "2:00 PM - 8:00 PM"]),
                day("Tue", &["09:00 AM - 1:00 PM", "2:00 PM - 8:00 PM"]),
                day("Wed", &["09:00 AM - 1:00 PM", "2:00 PM - 8:00 PM"]),
                day("Thu", &["09:00 AM - 1:00 PM", "2:00 PM - 8:00 PM"]),
                day("Fri", &["09:00 AM - 1:00 PM", "2:00 PM - 8:00 PM"]),
                day("Sat", &["09:00 AM - 1:00 PM"]),
            ],
            services: strings(&["General Medicine", "Diabetology", "Dermatology", "Health Check-up", "Diagnostics"]),
            gallery: vec![image("https://placehold.co/600x400.png", "Reception")],
        },
        Provider {
            id: "3".to_string(),
            name: "Dr. Arjun Singh".to_string(),
            provider_type: ProviderType::Doctor,
            speciality: "Pediatrician".to_string(),
            experience: "10 Years".to_string(),
            qualifications: "MBBS, DCH, MD (Pediatrics)".to_string(),
            image: "https://images.unsplash.com/photo-1526256262350-7da7584cf5eb?auto=format&fit=crop&w=400&q=80".to_string(),
            bio: "Dr. Arjun Singh cares for newborns, children and adolescents, with a focus on growth monitoring, vaccinations and childhood infections.".to_string(),
            rating: 4.9,
            reviews_count: 95,
            consultation_fee: "₹900".to_string(),
            languages: strings(&["English", "Hindi", "Kannada"]),
            clinic_name: "Little Steps Child Clinic".to_string(),
            location: "Bangalore".to_string(),
            address: "45, 5th Cross, Indiranagar, Bangalore, Karnataka 560038".to_string(),
            phone: "+91 99001 55667".to_string(),
            email: "dr.arjun.singh@littlesteps.example".to_string(),
            availability: vec![
                day("Mon", &["10:00 AM - 1:00 PM"]),
                day("Wed", &["10:00 AM - 1:00 PM", "5:00 PM - 8:00 PM"]),
                day("Fri", &["5:00 PM - 8:00 PM"]),
                day("Sat", &["10:00 AM - 1:00 PM"]),
            ],
            services: strings(&["Vaccination", "Newborn Care", "Growth Monitoring", "Fever", "Nutrition Counselling"]),
            gallery: vec![image("https://placehold.co/600x400.png", "Play Area")],
        },
        Provider {
            id: "4".to_string(),
            name: "Manipal Hospital".to_string(),
            provider_type: ProviderType::Hospital,
            speciality: "Hospital".to_string(),
            experience: "30 Years".to_string(),
            qualifications: "NABH, NABL Accredited".to_string(),
            image: "https://images.unsplash.com/photo-1464983953574-0892a716854b?auto=format&fit=crop&w=400&q=80".to_string(),
            bio: "Manipal Hospital is a multi-speciality tertiary care hospital with round-the-clock emergency services.".to_string(),
            rating: 4.7,
            reviews_count: 450,
            consultation_fee: "₹1000".to_string(),
            languages: strings(&["English", "Hindi", "Rajasthani"]),
            clinic_name: "Manipal Hospital".to_string(),
            location: "Jaipur".to_string(),
            address: "Sector 5, Main Sikar Road, Vidhyadhar Nagar, Jaipur, Rajasthan 302013".to_string(),
            phone: "+91 14141 56789".to_string(),
            email: "info.jaipur@manipalhospital.example".to_string(),
            availability: vec![
                day("Mon", &["08:00 AM - 2:00 PM", "3:00 PM - 9:00 PM"]),
                day("Tue", &["08:00 AM - 2:00 PM", "3:00 PM - 9:00 PM"]),
                day("Wed", &["08:00 AM - 2:00 PM", "3:00 PM - 9:00 PM"]),
                day("Thu", &["08:00 AM - 2:00 PM", "3:00 PM - 9:00 PM"]),
                day("Fri", &["08:00 AM - 2:00 PM", "3:00 PM - 9:00 PM"]),
                day("Sat", &["08:00 AM - 2:00 PM"]),
                day("Sun", &["10:00 AM - 1:00 PM"]),
            ],
            services: strings(&["Emergency Care", "Orthopedics", "Neurology", "Oncology", "Cardiac Surgery"]),
            gallery: vec![
                image("https://placehold.co/600x400.png", "Hospital Exterior"),
                image("https://placehold.co/600x400.png", "ICU"),
            ],
        },
    ]
}

pub fn providers() -> &'static [Provider] {
    static CATALOG: OnceLock<Vec<Provider>> = OnceLock::new();
    CATALOG.get_or_init(build_catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ids_are_unique() {
        let ids: HashSet<_> = providers().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.len(), providers().len());
    }

    #[test]
    fn every_provider_has_bookable_slots() {
        assert!(providers().iter().all(|p| !p.time_slots().is_empty()));
    }
}
