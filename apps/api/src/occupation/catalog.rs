//! Static career explorer catalog, grouped by category for browsing.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogCareer {
    pub title: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    /// Projected growth, percent.
    pub growth_rate: u32,
    /// Average salary, USD per year.
    pub avg_salary: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct CatalogCategory {
    pub category: &'static str,
    pub careers: Vec<CatalogCareer>,
}

// (title, description, category, growth_rate, avg_salary)
const CATALOG: &[(&str, &str, &str, u32, u32)] = &[
    ("Software Developer", "Design and develop software applications and systems.", "Software Development", 25, 85_000),
    ("Full Stack Developer", "Develop both frontend and backend of web applications.", "Software Development", 28, 95_000),
    ("Mobile App Developer", "Create applications for iOS and Android platforms.", "Software Development", 22, 88_000),
    ("DevOps Engineer", "Combine development and operations to improve deployment efficiency.", "Software Development", 35, 105_000),
    ("Backend Developer (Software Dev)", "Build server-side logic for software applications.", "Software Development", 26, 90_000),
    ("Data Scientist", "Analyze complex data sets to help organizations make better decisions.", "Data Science", 36, 95_000),
    ("Data Engineer", "Build systems to collect, process, and store data at scale.", "Data Science", 33, 92_000),
    ("Machine Learning Engineer", "Design, develop, and deploy machine learning models and systems. Build scalable ML pipelines, implement algorithms, and optimize model performance for real-world applications.", "Data Science", 40, 110_000),
    ("Business Intelligence Analyst", "Transform data into actionable business insights.", "Data Science", 29, 85_000),
    ("Statistician", "Apply statistical methods to analyze data and solve problems.", "Data Science", 30, 90_000),
    ("Big Data Engineer", "Focus on large-scale data processing and storage systems.", "Data Science", 34, 100_000),
    ("Cybersecurity Analyst", "Protect computer systems and networks from cyber threats.", "Cybersecurity", 32, 90_000),
    ("Security Engineer", "Design and implement security systems and protocols.", "Cybersecurity", 34, 98_000),
    ("Penetration Tester", "Test systems for security vulnerabilities.", "Cybersecurity", 30, 92_000),
    ("Information Security Officer", "Develop and enforce security policies and procedures.", "Cybersecurity", 35, 100_000),
    ("Cloud Architect", "Design and implement cloud infrastructure solutions.", "Cloud Computing", 38, 115_000),
    ("Cloud Engineer", "Build and maintain cloud-based systems and applications.", "Cloud Computing", 35, 105_000),
    ("Cloud Security Engineer", "Secure cloud environments and data.", "Cloud Computing", 37, 112_000),
    ("Cloud Administrator", "Manage and monitor cloud services and resources.", "Cloud Computing", 30, 98_000),
    ("AI Research Scientist", "Research and develop new AI algorithms and models.", "Artificial Intelligence", 42, 120_000),
    ("Natural Language Processing Engineer", "Develop systems that understand and process human language.", "Artificial Intelligence", 38, 110_000),
    ("Computer Vision Engineer", "Develop systems that can interpret visual information.", "Artificial Intelligence", 36, 108_000),
    ("Machine Learning Engineer", "Design, develop, and deploy machine learning models and systems. Build scalable ML pipelines, implement algorithms, and optimize model performance for real-world applications.", "Artificial Intelligence", 40, 110_000),
    ("Robotics Engineer", "Design, build, and program robots.", "Artificial Intelligence", 39, 115_000),
    ("Game Developer", "Design, develop, and produce video games.", "Game Development", 18, 75_000),
    ("Game Designer", "Create the concepts, rules, and story of video games.", "Game Development", 15, 70_000),
    ("Game Programmer", "Write code for game mechanics, AI, and graphics.", "Game Development", 20, 80_000),
    ("3D Artist (Games)", "Create 3D models and textures for game environments and characters.", "Game Development", 17, 72_000),
    ("Frontend Developer", "Build the user-facing part of websites and web applications.", "Web Development", 22, 80_000),
    ("Backend Developer", "Build the server-side logic and databases for web applications.", "Web Development", 23, 88_000),
    ("Full Stack Web Developer", "Work on both the frontend and backend of web applications.", "Web Development", 25, 92_000),
    ("Web Designer", "Focus on the visual and user experience aspects of websites.", "Web Development", 18, 75_000),
    ("UI/UX Designer (Web)", "Design user interfaces and user experiences for web applications.", "Web Development", 20, 82_000),
    ("Blockchain Developer", "Design and develop blockchain-based applications and smart contracts.", "Blockchain", 45, 120_000),
    ("Cryptocurrency Analyst", "Research and analyze cryptocurrency markets and trends.", "Blockchain", 40, 95_000),
    ("Smart Contract Auditor", "Review and audit smart contracts for security vulnerabilities.", "Blockchain", 42, 110_000),
    ("Decentralized Application (dApp) Developer", "Build applications that run on a decentralized network.", "Blockchain", 48, 115_000),
    ("IoT Solutions Architect", "Design and oversee the implementation of IoT solutions.", "Internet of Things", 35, 110_000),
    ("Embedded Systems Engineer", "Develop software for embedded devices and IoT devices.", "Internet of Things", 32, 95_000),
    ("IoT Hardware Engineer", "Design and develop hardware components for IoT devices.", "Internet of Things", 30, 100_000),
    ("IoT Data Scientist", "Analyze data generated from IoT devices to extract insights.", "Internet of Things", 38, 105_000),
];

pub fn careers() -> impl Iterator<Item = CatalogCareer> {
    CATALOG
        .iter()
        .map(|&(title, description, category, growth_rate, avg_salary)| CatalogCareer {
            title,
            description,
            category,
            growth_rate,
            avg_salary,
        })
}

/// Categories in the order they first appear, each with its careers in catalog order.
pub fn by_category() -> Vec<CatalogCategory> {
    let mut categories: Vec<CatalogCategory> = Vec::new();
    for career in careers() {
        match categories.iter_mut().find(|c| c.category == career.category) {
            Some(group) => group.careers.push(career),
            None => categories.push(CatalogCategory {
                category: career.category,
                careers: vec![career],
            }),
        }
    }
    categories
}
