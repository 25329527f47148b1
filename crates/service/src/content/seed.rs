//! Fixed demonstration data inserted by the seed route.
use models::{Project, Service, Testimonial};

fn service(title: &str, slug: &str, short: &str, description: &str, icon: &str, featured: bool) -> Service {
    Service {
        title: title.into(),
        slug: slug.into(),
        short: short.into(),
        description: Some(description.into()),
        icon: Some(icon.into()),
        featured,
    }
}

pub fn sample_services() -> Vec<Service> {
    vec![
        service(
            "Digital Marketing",
            "digital-marketing",
            "Growth-focused campaigns",
            "Performance marketing across search, social, and programmatic.",
            "rocket",
            true,
        ),
        service(
            "Brand Strategy",
            "brand-strategy",
            "Positioning that resonates",
            "Identity systems, voice, and messaging for modern brands.",
            "sparkles",
            true,
        ),
        service(
            "Web Experiences",
            "web-experiences",
            "High-velocity websites",
            "Conversion-optimized, fast, and accessible frontends.",
            "globe-2",
            true,
        ),
        service(
            "Video Production",
            "video-production",
            "Stories that move",
            "End-to-end creative, production, and post.",
            "video",
            false,
        ),
    ]
}

pub fn sample_projects() -> Vec<Project> {
    vec![
        Project {
            title: "NeoFin App Launch".into(),
            slug: "neofin-app".into(),
            summary: "Full-funnel launch with 2.3x ROI".into(),
            image: Some("https://images.unsplash.com/photo-1545239351-1141bd82e8a6?q=80&w=1200&auto=format&fit=crop".into()),
            tags: vec!["performance".into(), "mobile".into()],
            link: None,
            featured: true,
        },
        Project {
            title: "Aether Commerce".into(),
            slug: "aether-commerce".into(),
            summary: "Headless storefront with 98 Lighthouse".into(),
            image: Some("https://images.unsplash.com/photo-1509395176047-4a66953fd231?q=80&w=1200&auto=format&fit=crop".into()),
            tags: vec!["web".into(), "headless".into()],
            link: None,
            featured: true,
        },
    ]
}

pub fn sample_testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial {
            author: "Priya Sharma".into(),
            role: Some("CMO, Aether".into()),
            quote: "They delivered beyond expectations — creative, fast, and data-driven.".into(),
            company: Some("Aether".into()),
            avatar: None,
            featured: true,
        },
        Testimonial {
            author: "Rahul Mehta".into(),
            role: Some("Founder, NeoFin".into()),
            quote: "Our growth engine started the week we onboarded them.".into(),
            company: Some("NeoFin".into()),
            avatar: None,
            featured: true,
        },
    ]
}
