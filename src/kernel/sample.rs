//! Sample content inserted by the "insert sample text" action.

pub const SAMPLE_PARAGRAPHS: &[&str] = &[
    "EMPLOYMENT AGREEMENT",
    "This Employment Agreement is entered into by Northwind Traders (the \"Company\") and the individual named below (the \"Employee\").",
    "The Company agrees to employ the Employee in the position of Senior Analyst, reporting to the Director of Operations.",
    "Compensation. The Company shall pay a base salary of $85,000 per year, payable in accordance with the Company's standard payroll schedule.",
    "Duties. The employee shall devote full working time and attention to the business of the Company and perform the responsibilities reasonably assigned.",
    "Confidentiality. During and after employment, the Employee must not disclose confidential information belonging to the Company, its clients, or other employees.",
    "Termination. Either party may terminate this agreement with thirty days' written notice. The Company may terminate the employee immediately for cause.",
    "This sample document lets you test search: try \"document\", \"search\", \"sample\", or \"Word\".",
    "Governing Law. This agreement is governed by the laws of the State of Washington.",
];

pub fn sample_paragraphs() -> Vec<String> {
    SAMPLE_PARAGRAPHS.iter().map(|p| p.to_string()).collect()
}
