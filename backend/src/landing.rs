//! Static marketing content behind the same simulated-latency contract as
//! the real stores, so landing pages load the way dashboards do.

use shared::{Faq, Feature, Plan};

use crate::latency::Latency;

pub struct LandingStore {
    latency: Latency,
}

impl LandingStore {
    pub fn new(latency: Latency) -> Self {
        Self { latency }
    }

    pub async fn features(&self) -> Vec<Feature> {
        self.latency.simulate().await;
        [
            ("f1", "Instant Transfers", "Send money in seconds with bank-grade security.", "⚡"),
            ("f2", "Agent Network", "Cash-in/out via verified agents nationwide.", "🏪"),
            ("f3", "QR Payments", "Scan & pay at stores using dynamic QR.", "🔳"),
            ("f4", "Bill Payments", "Utilities, internet—pay in one place.", "🧾"),
            ("f5", "Multi-Layer Security", "2FA, device lock, anomaly checks.", "🛡️"),
            ("f6", "Real-time Alerts", "Push notifications for every move.", "🔔"),
        ]
        .into_iter()
        .map(|(id, title, desc, icon)| Feature {
            id: id.to_string(),
            title: title.to_string(),
            desc: desc.to_string(),
            icon: icon.to_string(),
        })
        .collect()
    }

    pub async fn plans(&self) -> Vec<Plan> {
        self.latency.simulate().await;
        vec![
            Plan {
                id: "p1".to_string(),
                name: "Starter".to_string(),
                price: 0,
                unit: "BDT/mo".to_string(),
                notes: "Pay-as-you-go fees".to_string(),
                perks: vec![
                    "Personal wallet".to_string(),
                    "P2P transfers".to_string(),
                    "Basic support".to_string(),
                ],
            },
            Plan {
                id: "p2".to_string(),
                name: "Pro".to_string(),
                price: 199,
                unit: "BDT/mo".to_string(),
                notes: "Lower fees + extras".to_string(),
                perks: vec![
                    "Priority support".to_string(),
                    "Spending analytics".to_string(),
                    "Custom limits".to_string(),
                ],
            },
            Plan {
                id: "p3".to_string(),
                name: "Business".to_string(),
                price: 499,
                unit: "BDT/mo".to_string(),
                notes: "For merchants & SMBs".to_string(),
                perks: vec![
                    "Multi-user access".to_string(),
                    "Invoicing & QR".to_string(),
                    "Dedicated manager".to_string(),
                ],
            },
        ]
    }

    pub async fn faqs(&self) -> Vec<Faq> {
        self.latency.simulate().await;
        [
            ("Is my money safe?", "We use strong encryption, device binding, and 2FA."),
            ("How fast are transfers?", "Instant within ZPay. Banks vary by partner."),
            ("Where can I cash-in?", "Any verified ZPay Agent kiosk near you."),
            ("Are there fees?", "Yes—depends on transfer type and plan."),
        ]
        .into_iter()
        .map(|(question, answer)| Faq {
            question: question.to_string(),
            answer: answer.to_string(),
        })
        .collect()
    }
}
