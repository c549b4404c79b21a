//! Built-in site content used when no content file is configured.

use crate::model::{CompanyProfile, ProjectCase, ServiceOffering, Testimonial};

pub(crate) fn company() -> CompanyProfile {
    CompanyProfile {
        name: "NebulaStack Labs".into(),
        tagline: "We craft future-ready digital systems".into(),
        pillars: labels(&["AI", "Cloud", "Data", "Security"]),
    }
}

pub(crate) fn services() -> Vec<ServiceOffering> {
    vec![
        service(
            "💡",
            "AI Solutions",
            "Custom LLMs, RAG, vision models, and MLOps pipelines for real-world ROI.",
        ),
        service(
            "☁️",
            "Cloud & DevOps",
            "Scalable infra on AWS/GCP/Azure, Kubernetes, observability, and CI/CD.",
        ),
        service(
            "🧱",
            "Product Engineering",
            "SaaS apps, APIs, and microservices with high performance and quality.",
        ),
        service(
            "🛡️",
            "Security Engineering",
            "AppSec, threat modeling, SAST/DAST, and compliance-ready architectures.",
        ),
    ]
}

pub(crate) fn projects() -> Vec<ProjectCase> {
    vec![
        project(
            "Helios Analytics",
            &["Python", "FastAPI", "React", "Snowflake"],
            "Self-serve analytics with semantic layer and row-level security.",
            "photo-1551281044-8d8e145ed9f9",
        ),
        project(
            "Orion EdgeAI",
            &["PyTorch", "ONNX", "Rust", "WebGPU"],
            "Edge inference runtime with sub-50ms latency on consumer devices.",
            "photo-1518779578993-ec3579fee39f",
        ),
        project(
            "Nimbus DevOps",
            &["Terraform", "Kubernetes", "Grafana", "ArgoCD"],
            "Zero-downtime deploys and golden-path platform engineering.",
            "photo-1518770660439-4636190af475",
        ),
    ]
}

pub(crate) fn testimonials() -> Vec<Testimonial> {
    vec![
        testimonial(
            "NebulaStack rebuilt our data stack and doubled analytics velocity.",
            "Anika Rao",
            "CPO, QuantaPay",
        ),
        testimonial(
            "From PoC to production in 10 weeks. Flawless execution.",
            "Marcus Lee",
            "CTO, FleetIQ",
        ),
        testimonial(
            "Security by design. Passed audit in one go.",
            "Sara Kim",
            "Head of Risk, Meridia",
        ),
    ]
}

fn labels(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn service(icon: &str, title: &str, description: &str) -> ServiceOffering {
    ServiceOffering {
        icon: icon.into(),
        title: title.into(),
        description: description.into(),
    }
}

fn project(name: &str, stack: &[&str], summary: &str, photo: &str) -> ProjectCase {
    ProjectCase {
        name: name.into(),
        stack: labels(stack),
        summary: summary.into(),
        image_url: format!(
            "https://images.unsplash.com/{photo}?q=80&w=1600&auto=format&fit=crop"
        ),
        link: "#".into(),
    }
}

fn testimonial(quote: &str, author: &str, role: &str) -> Testimonial {
    Testimonial {
        quote: quote.into(),
        author: author.into(),
        role: role.into(),
    }
}
