//! Shared sample tables for unit tests.
//!
//! Billing totals: PC-001 520h, PC-002 120h, PC-003 260h, PC-004 50h.
//! Erin Park (10005) has an unknown role, no billing rows, and no resume.

use crate::data::{load_snapshot, TableSources};
use crate::schema::WorkforceSnapshot;
use std::io::Cursor;

pub(crate) const EMPLOYEES: &str = "\
Employee_ID,Name,Email,Role_ID,Job_Title,Location,Skills,LinkedIn_URL
10003,Carol Singh,carol@example.com,R2,Senior Engineer,\"Austin, TX\",Python; PyTorch; AWS,https://linkedin.com/in/carolsingh
10001,Alice Ward,alice@example.com,R1,Technical Lead - AI/ML,\"Austin, TX\",Python; OpenCV,https://linkedin.com/in/aliceward
10002,Bob Chen,bob@example.com,R2,Senior CV Engineer,\"Dallas, TX\",Python; TensorFlow; AWS,
10004,Dan Ortiz,dan@example.com,R3,Project Manager,\"Washington, DC\",Leadership; NoSQL; Agile,
10005,Erin Park,erin@example.com,R9,Data Analyst,Remote,SQL; Tableau,
";

pub(crate) const ROLES: &str = "\
Role_ID,Standard_Role,Role_Title_Variants
R1,Technical Lead,Tech Lead; Lead Engineer
R2,Senior Engineer,Senior CV Engineer; Sr Engineer
R3,Project Manager,PM; Program Manager
R4,AI Research Lead,Research Lead
";

pub(crate) const PROJECTS: &str = "\
Billing_Code,Project_Name,Client,Industry,Technologies,Dollar_Amount,Project_Scope
PC-001,TX Facial Rec,TX Sheriff's Dept,Law Enforcement,Python; OpenCV,250000,Statewide facial recognition
PC-002,DHS Border Analytics,Federal DHS,Government,Python; AWS; TensorFlow,400000,Border crossing analytics
PC-003,Retail Vision,ShopCo,Commercial,PyTorch; AWS,150000,Shelf monitoring
PC-004,City Camera Audit,Austin PD,Law Enforcement,OpenCV; SQL,90000,Camera inventory audit
";

pub(crate) const BILLING: &str = "\
Billing_Code,Employee_ID,Year,Hours_Billed,Role_in_Project
PC-001,10001,2025,120,Technical Lead
PC-002,10001,2024,40,Advisor
PC-001,10002,2025,300,CV Engineer
PC-001,10002,2024,100,CV Engineer
PC-002,10002,2025,80,ML Engineer
PC-003,10003,2025,200,Senior Engineer
PC-003,10004,2025,60,Project Manager
PC-004,10004,2024,50,Project Manager
";

pub(crate) const RESUMES: &str = "\
Employee_ID,Education,Experience,Certifications,Summary
10001,MS Computer Science,\"8y Python engineer, 2y law enforcement support\",AWS Solutions Architect,Leads CV programs
10002,BS Electrical Engineering,5 years computer vision,TensorFlow Developer,Builds detection models
10003,PhD Artificial Intelligence,Extensive industry background,,Research-minded engineer
10004,MBA,12 yrs program management,PMP,Delivery lead
";

pub(crate) const DELIVERABLES: &str = "\
Billing_Code,Deliverable,Date_Completed,Topic_Area,Technologies,Client,Codebase
PC-001,Face matching pipeline,2025-03-14,Computer Vision; Biometrics,Python; OpenCV,TX Sheriff's Dept,github.com/acme/facerec
PC-002,Border dashboard,2024-11-02,Analytics,Python; AWS,Federal DHS,github.com/acme/border
PC-001,Model audit report,2025-06-30,Compliance; Computer Vision,Python,TX Sheriff's Dept,
PC-003,Shelf detector,Q3 2025,Computer Vision,PyTorch,ShopCo,github.com/acme/shelf
";

pub(crate) fn sources() -> TableSources<Cursor<&'static str>> {
    TableSources {
        employees: Cursor::new(EMPLOYEES),
        roles: Cursor::new(ROLES),
        projects: Cursor::new(PROJECTS),
        billing: Cursor::new(BILLING),
        resumes: Cursor::new(RESUMES),
        deliverables: Cursor::new(DELIVERABLES),
    }
}

pub(crate) fn snapshot() -> WorkforceSnapshot {
    load_snapshot(sources()).expect("fixture tables load")
}
