//! Static content catalog
//!
//! Bundled copy of the services and company profile, served whenever the
//! document store cannot provide them. Read-only; never written to the store.

use indexmap::IndexMap;

use super::company::{CompanyAbout, CompanyContact, CompanyProfile, COMPANY_KEY};
use super::service::{Service, ServiceDetail};

/// Immutable fallback content
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    services: Vec<Service>,
    company: CompanyProfile,
}

impl StaticCatalog {
    /// Catalog with the content shipped with the service.
    pub fn bundled() -> Self {
        Self {
            services: bundled_services(),
            company: bundled_company(),
        }
    }

    /// Active services in display order
    pub fn services(&self) -> Vec<Service> {
        self.services.iter().filter(|s| s.is_active).cloned().collect()
    }

    pub fn service(&self, id: &str) -> Option<Service> {
        self.services
            .iter()
            .find(|s| s.is_active && s.id == id)
            .cloned()
    }

    pub fn company(&self, key: &str) -> Option<CompanyProfile> {
        (self.company.id == key).then(|| self.company.clone())
    }
}

impl Default for StaticCatalog {
    fn default() -> Self {
        Self::bundled()
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[allow(clippy::too_many_arguments)]
fn service(
    id: &str,
    title: &str,
    description: &str,
    icon: &str,
    features: &[&str],
    overview: &str,
    benefits: &[&str],
    technologies: &[&str],
    case_studies: &[&str],
) -> Service {
    Service {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        icon: icon.to_string(),
        features: strings(features),
        detailed_info: ServiceDetail {
            overview: overview.to_string(),
            benefits: strings(benefits),
            technologies: strings(technologies),
            case_studies: strings(case_studies),
        },
        is_active: true,
        created_at: None,
        updated_at: None,
    }
}

fn bundled_services() -> Vec<Service> {
    vec![
        service(
            "1",
            "ICT Solutions",
            "Technology solutions for businesses - infrastructure, networking, and digital transformation services.",
            "Monitor",
            &["Network Infrastructure", "Cloud Solutions", "Digital Transformation", "IT Consulting"],
            "Our ICT solutions provide comprehensive technology infrastructure and digital transformation services to modernize your business operations.",
            &[
                "Improved operational efficiency and productivity",
                "Enhanced security and data protection",
                "Scalable infrastructure that grows with your business",
            ],
            &[
                "Cloud Platforms (AWS, Azure, Google Cloud)",
                "Network Security Systems",
                "Enterprise Software Solutions",
            ],
            &["Migrated 500+ employee company to cloud infrastructure, reducing IT costs by 40%"],
        ),
        service(
            "2",
            "AI Solutions",
            "Artificial intelligence-powered solutions to automate processes and enhance decision-making.",
            "Brain",
            &["Machine Learning", "Predictive Analytics", "Process Automation", "AI Consulting"],
            "Transform your business with cutting-edge AI solutions that automate complex processes and provide predictive insights.",
            &[
                "Automated workflow processes saving 60% manual effort",
                "Predictive analytics for better business forecasting",
                "Enhanced customer experience through AI chatbots",
            ],
            &[
                "Machine Learning Algorithms",
                "Natural Language Processing",
                "Computer Vision",
            ],
            &["Developed AI chatbot reducing customer service response time by 75%"],
        ),
        service(
            "3",
            "Advertising & Marketing",
            "Creative campaigns and strategies to amplify your brand and reach your target audience.",
            "Megaphone",
            &["Digital Marketing", "Brand Strategy", "Creative Campaigns", "Social Media Marketing"],
            "Our comprehensive marketing and advertising services help businesses build strong brand presence and drive measurable growth.",
            &[
                "Increased brand visibility and recognition",
                "Higher customer engagement and conversion rates",
                "Data-driven marketing strategies for better ROI",
            ],
            &[
                "Marketing Automation Platforms",
                "Social Media Management Tools",
                "Analytics and Tracking Systems",
            ],
            &["Increased client's social media engagement by 300% in 6 months"],
        ),
        service(
            "4",
            "Programming & Coding",
            "Custom software development solutions tailored to your business needs and objectives.",
            "Code",
            &["Web Development", "Mobile Apps", "Custom Software", "API Integration"],
            "Our expert development team creates custom software solutions specifically designed to meet your unique business requirements.",
            &[
                "Custom solutions tailored to your specific needs",
                "Scalable architecture for future growth",
                "Modern, responsive user interfaces",
            ],
            &[
                "React, Node.js, Python, Java",
                "Mobile Development (React Native, Flutter)",
                "Database Systems (MongoDB, PostgreSQL)",
            ],
            &["Built e-commerce platform handling 10,000+ daily transactions"],
        ),
        service(
            "5",
            "Financial Technology",
            "Innovative fintech solutions to streamline financial processes and enhance user experience.",
            "CreditCard",
            &["Payment Systems", "Digital Banking", "Blockchain Solutions", "Financial Analytics"],
            "Our fintech solutions revolutionize financial operations through secure payment systems and advanced financial analytics.",
            &[
                "Secure and compliant financial transactions",
                "Streamlined payment processing",
                "Advanced financial analytics and reporting",
            ],
            &[
                "Payment Gateway Integration",
                "Blockchain Platforms",
                "Digital Wallet Systems",
            ],
            &["Implemented payment system processing $1M+ monthly transactions"],
        ),
    ]
}

fn bundled_company() -> CompanyProfile {
    let social_media: IndexMap<String, String> = ["linkedin", "twitter", "facebook", "instagram"]
        .into_iter()
        .map(|platform| (platform.to_string(), "#".to_string()))
        .collect();

    CompanyProfile {
        id: COMPANY_KEY.to_string(),
        name: "AximoIX".to_string(),
        motto: "Innovate. Engage. Grow.".to_string(),
        tagline: "Empowering Business, Amplifying Success".to_string(),
        description: "AximoIX is a dynamic company offering a range of services, including ICT solutions, AI solutions, advertising and marketing, programming and coding, and financial technology. We partner with businesses to drive growth, improve efficiency, and achieve success.".to_string(),
        about: CompanyAbout {
            goal: "Empower businesses to thrive through innovative technology, creative marketing, and strategic financial solutions.".to_string(),
            vision: "To be a leading provider of integrated ICT, AI, advertising, programming, and financial technology solutions, driving business growth and success.".to_string(),
            mission: "At AximoIX, our mission is to deliver tailored solutions that combine technology, creativity, and innovation, fostering long-term partnerships and driving business success.".to_string(),
        },
        contact: CompanyContact {
            email: "hello@aximoix.com".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            address: "123 Innovation Drive, Tech City, TC 12345".to_string(),
            social_media,
        },
        updated_at: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundles_five_active_services_with_unique_ids() {
        let catalog = StaticCatalog::bundled();
        let services = catalog.services();

        assert_eq!(services.len(), 5);
        assert!(services.iter().all(|s| s.is_active));

        let mut ids: Vec<&str> = services.iter().map(|s| s.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids, vec!["1", "2", "3", "4", "5"]);
    }

    #[test]
    fn looks_up_services_by_id() {
        let catalog = StaticCatalog::bundled();
        assert_eq!(catalog.service("2").map(|s| s.title), Some("AI Solutions".into()));
        assert!(catalog.service("999").is_none());
    }

    #[test]
    fn company_is_keyed() {
        let catalog = StaticCatalog::bundled();
        assert_eq!(catalog.company(COMPANY_KEY).map(|c| c.name), Some("AximoIX".into()));
        assert!(catalog.company("someone-else").is_none());
    }

    #[test]
    fn social_media_keeps_display_order() {
        let company = StaticCatalog::bundled().company(COMPANY_KEY).unwrap();
        let platforms: Vec<&str> = company.contact.social_media.keys().map(String::as_str).collect();
        assert_eq!(platforms, vec!["linkedin", "twitter", "facebook", "instagram"]);
    }
}
