//! The compiled-in profile served when no `PROFILE_PATH` is configured.

use crate::models::{Education, Job, Personal, Profile, Skills};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn default_profile() -> Profile {
    Profile {
        personal: Personal {
            name: "Thiha Linn".to_string(),
            role: "Fullstack Developer".to_string(),
            location: "Yangon, Myanmar".to_string(),
            email: "thihalinn0004@gmail.com".to_string(),
            linkedin: "https://www.linkedin.com/in/Thiha-Linn".to_string(),
            github: "https://github.com/your-username".to_string(),
            avatar: Some("/assets/thihlinn.png".to_string()),
            summary: "Fullstack Developer with enterprise experience delivering financial and \
                      insurance technologies. Specialized in building high-availability backends \
                      (Spring Boot, NestJS) and cross-platform frontends. Bilingual professional \
                      (English/Mandarin HSK-4) bridging technical communication gaps in \
                      international teams."
                .to_string(),
        },
        skills: Skills {
            backend: strings(&[
                "Java Spring Boot",
                "Java Servlet",
                "NestJS",
                "Node.js",
                "Microservices",
                "REST APIs",
                "Jersey",
            ]),
            frontend: strings(&["React", "Next.js", "Angular", "TypeScript", "Tailwind CSS"]),
            mobile: strings(&["Flutter (Dart)", "React Native (Expo)"]),
            database: strings(&["PostgreSQL", "Microsoft SQL", "Redis"]),
            devops: strings(&[
                "Docker",
                "Ansible",
                "CI/CD Pipelines",
                "Git",
                "System Monitoring",
                "Linux",
            ]),
        },
        experience: vec![
            Job {
                id: 1,
                role: "Fullstack Developer".to_string(),
                company: "KBZMS General Insurance".to_string(),
                period: "July 2025 - Present".to_string(),
                description: strings(&[
                    "Engineered the Insurance Integration System (KYC) using Java Servlets and \
                     Jersey, implementing bank-grade secure API standards.",
                    "Architected an Admin Portal (Spring Boot/React) with granular Role-Based \
                     Access Control (RBAC), reducing administrative overhead by 40%.",
                    "Integrated secure JWT authentication and RESTful APIs for the KBZMS Mini \
                     App within KPay.",
                ]),
            },
            Job {
                id: 2,
                role: "Fullstack and Mobile Developer".to_string(),
                company: "Myanmar Information Technology Co., Ltd".to_string(),
                period: "Jun 2024 - July 2025".to_string(),
                description: strings(&[
                    "Built a scalable Workflow Management System (Spring Boot/Angular) capable \
                     of handling complex multi-tier approval flows for enterprise clients.",
                    "Developed the 'A-365' Attendance App (NestJS/Flutter), optimizing API \
                     response times and implementing geo-fencing features.",
                ]),
            },
        ],
        education: Education {
            school: "Hmawbi Technological University (HMTU)".to_string(),
            degree: "B.E. (Information Technology)".to_string(),
            period: "2021 - Present (Fourth Year)".to_string(),
            project: "Netflix Clone: High-performance video streaming with Spring Boot & Next.js."
                .to_string(),
        },
        certifications: strings(&[
            "Building A DevOps Culture: A Beginner Guide (Batch 3)",
            "Mobile Developer Class (Batch-2)",
            "Java Developer Class (Batch-7)",
            "Msquare Programming (Batch-2)",
        ]),
        languages: strings(&["English (Professional)", "Mandarin (HSK-4)"]),
    }
}
