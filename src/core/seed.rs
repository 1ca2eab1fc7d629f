//! Built-in literal data set
//!
//! The collection the store is seeded with at process start, before any
//! replacement document is loaded. Everything here starts public; drafts
//! are made private from the workshop.

use crate::core::{Category, Certificate, IconKind, Project, SkillItem, Status, Visibility};

fn skill(
    id: &str,
    name: &str,
    category: Category,
    status: Status,
    description: &str,
    tags: &[&str],
) -> SkillItem {
    SkillItem {
        id: id.to_string(),
        name: name.to_string(),
        category,
        status,
        visibility: Visibility::Public,
        description: description.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}

/// Initial technology and skill entries
pub fn default_items() -> Vec<SkillItem> {
    use Category::*;
    use Status::*;

    vec![
        // Languages
        skill("1", "Python (Advanced)", Languages, Active, "Backend, data engineering, AI. Primary language.", &["core", "advanced"]),
        skill("2", "SQL (Spark/T-SQL)", Languages, Active, "Advanced queries and optimization.", &["core", "data"]),
        skill("3", "Bash", Languages, Active, "System scripting and automation.", &["devops"]),
        // Data engineering
        skill("4", "Databricks", DataEngineering, Active, "Lakehouse, Asset Bundles (DABs).", &["platform", "big-data"]),
        skill("5", "PySpark", DataEngineering, Active, "Large-scale distributed processing.", &["big-data"]),
        skill("6", "Delta Lake", DataEngineering, Active, "Table format, ACID, time travel.", &["storage"]),
        skill("7", "Unity Catalog", DataEngineering, Active, "Data governance and lineage.", &["governance"]),
        skill("8", "Delta Live Tables", DataEngineering, Active, "Declarative ETL pipelines.", &["etl"]),
        skill("9", "Pandas", DataEngineering, Active, "In-memory data analysis.", &["analysis"]),
        // Cloud & DevOps
        skill("10", "Azure (ADF, ADLS)", Devops, Active, "Data Factory, Storage Gen2, Machine Learning.", &["cloud", "azure"]),
        skill("11", "GCP (Vertex AI)", Devops, Active, "AI platform and BigQuery.", &["cloud", "gcp"]),
        skill("12", "Terraform", Devops, Active, "Infrastructure as Code.", &["iac"]),
        skill("13", "Docker", Devops, Active, "Application containerization.", &["infra"]),
        skill("14", "GitHub Actions", Devops, Active, "CI/CD pipelines.", &["cicd"]),
        skill("15", "Azure DevOps", Devops, Active, "Repository and pipeline management.", &["cicd"]),
        skill("16", "MLflow", DataEngineering, Active, "ML model lifecycle management.", &["mlops"]),
        // Tools
        skill("17", "Code Quality Stack", Tools, Active, "Ruff, Mypy, SonarQube.", &["quality"]),
        skill("18", "Security", Tools, Active, "Snyk, OAuth2 implementation.", &["security"]),
        // Business
        skill("19", "Agile / Scrum", Business, Active, "Agile delivery methods.", &["management"]),
        skill("20", "Jira / Confluence", Business, Active, "Task and documentation management.", &["tools"]),
        // Learning & soft skills
        skill("21", "AI Agents", DataEngineering, Learning, "Autonomous decision systems.", &["future"]),
        skill("22", "Polish / English", SoftSkills, Active, "Native / full business proficiency.", &["lang"]),
    ]
}

/// Featured portfolio projects
pub fn default_projects() -> Vec<Project> {
    vec![
        Project {
            id: "p1".to_string(),
            title: "Autonomous Data Pipeline".to_string(),
            short_description: "Self-driving ETL orchestrator on Azure Data Factory and Python."
                .to_string(),
            full_description: "Designed and deployed a fully automated data pipeline processing \
                5TB a day. Azure Functions trigger the flows, PySpark on Databricks runs the \
                transformations, and a custom quality-assurance stage flags anomalies before \
                anything lands in the warehouse."
                .to_string(),
            date: "August 2024".to_string(),
            tech_stack: vec![
                "Azure".to_string(),
                "Python".to_string(),
                "Databricks".to_string(),
                "SQL".to_string(),
            ],
            image_count: 2,
        },
        Project {
            id: "p2".to_string(),
            title: "Market Analysis AI Agent".to_string(),
            short_description: "AI agent analyzing market trends in real time.".to_string(),
            full_description: "Startup prototype pairing an LLM with a vector database for \
                sentiment analysis over financial news. The agent aggregates sources on its own, \
                scores their credibility and produces investment reports; built as research into \
                autonomy in decision systems."
                .to_string(),
            date: "January 2025".to_string(),
            tech_stack: vec![
                "OpenAI API".to_string(),
                "LangChain".to_string(),
                "Pinecone".to_string(),
                "FastAPI".to_string(),
            ],
            image_count: 3,
        },
        Project {
            id: "p3".to_string(),
            title: "Smart Home IoT Hub".to_string(),
            short_description: "Private smart-home hub with on-device ML.".to_string(),
            full_description: "Integrates Zigbee sensors with a React dashboard, all running on \
                a Raspberry Pi k3s cluster. A small TensorFlow Lite model predicts energy use \
                and tunes the heating from the weather forecast and household presence."
                .to_string(),
            date: "May 2024".to_string(),
            tech_stack: vec![
                "IoT".to_string(),
                "Docker".to_string(),
                "K3s".to_string(),
                "React".to_string(),
                "TensorFlow".to_string(),
            ],
            image_count: 1,
        },
    ]
}

/// Certifications and awards
pub fn default_certificates() -> Vec<Certificate> {
    vec![
        Certificate {
            id: "c1".to_string(),
            name: "Azure Data Engineer Associate (DP-203)".to_string(),
            issuer: "Microsoft".to_string(),
            date: "2024".to_string(),
            url: None,
            icon: IconKind::Azure,
        },
        Certificate {
            id: "c2".to_string(),
            name: "Professional Cloud Architect".to_string(),
            issuer: "Google Cloud".to_string(),
            date: "2023".to_string(),
            url: None,
            icon: IconKind::Gcp,
        },
        Certificate {
            id: "c3".to_string(),
            name: "TensorFlow Developer Certificate".to_string(),
            issuer: "Google".to_string(),
            date: "2022".to_string(),
            url: None,
            icon: IconKind::Generic,
        },
    ]
}
