//! Privacy policy and terms of service, kept as data so both pages share one
//! renderer.

use crate::Route;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Inline {
    Text(&'static str),
    Strong(&'static str),
    Link { label: &'static str, route: Route },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Block {
    Paragraph(&'static [Inline]),
    List(&'static [&'static [Inline]]),
    /// Boxed aside.
    Callout(&'static [Inline]),
    /// Button that opens a mail to the contact address.
    ContactLink,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LegalSection {
    pub heading: &'static str,
    pub blocks: &'static [Block],
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LegalDocument {
    pub slug: &'static str,
    pub title: &'static str,
    pub page_title: &'static str,
    pub last_updated: &'static str,
    pub greeting: &'static [Inline],
    pub intro: &'static [Inline],
    pub sections: &'static [LegalSection],
}

use Block::{Callout, ContactLink, List, Paragraph};
use Inline::{Strong, Text};

pub static PRIVACY_POLICY: LegalDocument = LegalDocument {
    slug: "privacy",
    title: "Privacy Policy",
    page_title: "Privacy Policy - Chapterly",
    last_updated: "November 5, 2025",
    greeting: &[Text("Thank you for using "), Strong("Chapterly"), Text("!")],
    intro: &[Text(
        "Your privacy is important to us. This Privacy Policy explains how we collect, use, \
         and protect your information when you use our mobile application (“App,” “we,” “us,” \
         or “our”). By using Chapterly, you agree to this Privacy Policy.",
    )],
    sections: &[
        LegalSection {
            heading: "1. Information We Collect",
            blocks: &[
                Paragraph(&[Text(
                    "We collect only the minimal information necessary to operate the app:",
                )]),
                List(&[
                    &[
                        Strong("Email Address:"),
                        Text(" When you create an account, we collect your email address."),
                    ],
                    &[
                        Strong("Name (optional):"),
                        Text(" Your name may be derived from your email address for display purposes."),
                    ],
                ]),
                Callout(&[
                    Text("We do "),
                    Strong("not"),
                    Text(" collect any other personal information."),
                ]),
            ],
        },
        LegalSection {
            heading: "2. How We Use Your Information",
            blocks: &[
                Paragraph(&[Text("We use your information to:")]),
                List(&[
                    &[Text("Create and manage your account")],
                    &[Text("Personalize your user experience (e.g., display your name)")],
                    &[Text("Communicate with you if you reach out to us directly")],
                ]),
                Paragraph(&[
                    Text("We do "),
                    Strong("not"),
                    Text(" sell, share, or rent your data to any third parties."),
                ]),
            ],
        },
        LegalSection {
            heading: "3. No Tracking or Analytics",
            blocks: &[Paragraph(&[
                Text("Chapterly does "),
                Strong("not"),
                Text(" use tracking technologies, analytics tools, or advertising SDKs. We do "),
                Strong("not"),
                Text(" monitor your activity or collect behavioral data."),
            ])],
        },
        LegalSection {
            heading: "4. No Location Data",
            blocks: &[Paragraph(&[
                Text("We do "),
                Strong("not"),
                Text(" collect, store, or access your device’s geolocation."),
            ])],
        },
        LegalSection {
            heading: "5. No Push Notifications",
            blocks: &[Paragraph(&[
                Text("We currently do "),
                Strong("not"),
                Text(" send push notifications or in-app messages."),
            ])],
        },
        LegalSection {
            heading: "6. Account Deletion",
            blocks: &[
                Paragraph(&[
                    Text("You can delete your account at any time through the "),
                    Strong("Settings"),
                    Text(" section of the app."),
                ]),
                Paragraph(&[Text(
                    "When you delete your account, your profile and associated data (such as saved \
                     books and quotes) are permanently deleted from our servers.",
                )]),
            ],
        },
        LegalSection {
            heading: "7. Data Security",
            blocks: &[
                Paragraph(&[Text(
                    "We use reasonable technical and organizational measures to protect your \
                     information against unauthorized access, alteration, or destruction.",
                )]),
                Paragraph(&[Text(
                    "However, no method of transmission over the internet is 100% secure, and we \
                     cannot guarantee absolute security.",
                )]),
            ],
        },
        LegalSection {
            heading: "8. Children’s Privacy",
            blocks: &[Paragraph(&[
                Text("Chapterly is intended for users "),
                Strong("aged 14 and older"),
                Text(
                    ". We do not knowingly collect information from anyone under 14. If we learn \
                     that we have collected such data, we will delete it promptly.",
                ),
            ])],
        },
        LegalSection {
            heading: "9. International Users",
            blocks: &[Paragraph(&[Text(
                "Chapterly is available worldwide. By using the app, you acknowledge that your \
                 information may be transferred and processed in countries where our servers or \
                 service providers are located.",
            )])],
        },
        LegalSection {
            heading: "10. Changes to This Policy",
            blocks: &[Paragraph(&[Text(
                "We may update this Privacy Policy from time to time. If we make material changes, \
                 we’ll update the “Last Updated” date at the top of this page.",
            )])],
        },
        LegalSection {
            heading: "11. Contact Us",
            blocks: &[
                Paragraph(&[Text(
                    "If you have any questions, concerns, or requests regarding this Privacy \
                     Policy, please contact us at:",
                )]),
                ContactLink,
            ],
        },
    ],
};

pub static TERMS_OF_SERVICE: LegalDocument = LegalDocument {
    slug: "terms",
    title: "Terms and Conditions",
    page_title: "Terms and Conditions - Chapterly",
    last_updated: "November 5, 2025",
    greeting: &[Text("Welcome to "), Strong("Chapterly"), Text("!")],
    intro: &[Text(
        "These Terms and Conditions (“Terms”) govern your use of the Chapterly mobile application \
         (“App,” “we,” “us,” or “our”). By creating an account or using Chapterly, you agree to \
         be bound by these Terms. If you do not agree, please do not use the App.",
    )],
    sections: &[
        LegalSection {
            heading: "1. Overview",
            blocks: &[
                Paragraph(&[
                    Strong("Chapterly"),
                    Text(" allows users to add and manage their favorite "),
                    Strong("books and quotes"),
                    Text("."),
                ]),
                Paragraph(&[Text(
                    "Currently, users can add text-based entries. In future versions, we may \
                     introduce additional features such as adding photos.",
                )]),
            ],
        },
        LegalSection {
            heading: "2. Eligibility",
            blocks: &[
                Paragraph(&[
                    Text("You must be at least "),
                    Strong("14 years old"),
                    Text(" to use Chapterly."),
                ]),
                Paragraph(&[Text(
                    "By using the App, you confirm that you meet this minimum age requirement.",
                )]),
            ],
        },
        LegalSection {
            heading: "3. Account Registration",
            blocks: &[
                Paragraph(&[
                    Text("To use Chapterly, you must create an account using your "),
                    Strong("email address"),
                    Text("."),
                ]),
                List(&[
                    &[Text("You are responsible for maintaining the security of your account.")],
                    &[Text("You agree to provide accurate and up-to-date information.")],
                    &[
                        Text("You can delete your account at any time through the "),
                        Strong("Settings"),
                        Text(" section of the app."),
                    ],
                ]),
                Callout(&[
                    Text("We currently do "),
                    Strong("not"),
                    Text(" support sign-in with Apple, Google, or other third-party logins."),
                ]),
            ],
        },
        LegalSection {
            heading: "4. User Content",
            blocks: &[
                Paragraph(&[Text(
                    "You are responsible for any content you add to the App, including book \
                     titles, quotes, or any other text-based entries.",
                )]),
                Paragraph(&[Text(
                    "By posting or saving content in Chapterly, you retain ownership of your data. \
                     However, you grant us a limited right to store and display your content \
                     within the App for your personal use.",
                )]),
                Paragraph(&[Text("You agree not to upload or share content that:")]),
                List(&[
                    &[Text("Violates any laws or third-party rights")],
                    &[Text("Contains hate speech, harassment, or explicit content")],
                ]),
                Paragraph(&[Text(
                    "We reserve the right to remove inappropriate or illegal content if necessary.",
                )]),
            ],
        },
        LegalSection {
            heading: "5. Privacy",
            blocks: &[
                Paragraph(&[Text("We value your privacy.")]),
                Paragraph(&[
                    Text("We collect only your "),
                    Strong("email address"),
                    Text(" (and your name if it can be derived from your email)."),
                ]),
                Paragraph(&[Text("We do "), Strong("not"), Text(":")]),
                List(&[
                    &[Text("Track your activity")],
                    &[Text("Collect geolocation data")],
                    &[Text("Send push notifications")],
                    &[Text("Use analytics or advertising tools")],
                ]),
                Paragraph(&[
                    Text("To learn more, please review our "),
                    Inline::Link {
                        label: "Privacy Policy",
                        route: Route::Privacy,
                    },
                    Text("."),
                ]),
            ],
        },
        LegalSection {
            heading: "6. Intellectual Property",
            blocks: &[
                Paragraph(&[
                    Text("All rights, titles, and interests in the "),
                    Strong("Chapterly"),
                    Text(
                        " app, including the name, logo, design, and software, belong to the \
                         developer.",
                    ),
                ]),
                Paragraph(&[Text(
                    "You may not copy, modify, distribute, or reverse-engineer any part of the app.",
                )]),
            ],
        },
        LegalSection {
            heading: "7. Termination",
            blocks: &[
                Paragraph(&[
                    Text("You may delete your account at any time from the "),
                    Strong("Settings"),
                    Text(" page."),
                ]),
                Paragraph(&[Text(
                    "We reserve the right to suspend or terminate your account if you violate \
                     these Terms.",
                )]),
            ],
        },
        LegalSection {
            heading: "8. Disclaimer",
            blocks: &[
                Paragraph(&[Text("Chapterly is provided “as is” and “as available.”")]),
                Paragraph(&[Text(
                    "We do not guarantee uninterrupted or error-free operation. You use the app at \
                     your own risk.",
                )]),
            ],
        },
        LegalSection {
            heading: "9. Limitation of Liability",
            blocks: &[
                Paragraph(&[Text(
                    "To the maximum extent permitted by law, Chapterly and its developer will not \
                     be liable for any damages resulting from:",
                )]),
                List(&[
                    &[Text("Use or inability to use the App")],
                    &[Text("Loss of data")],
                    &[Text("Unauthorized access to your account")],
                ]),
            ],
        },
        LegalSection {
            heading: "10. Changes to These Terms",
            blocks: &[
                Paragraph(&[Text("We may update these Terms from time to time.")]),
                Paragraph(&[Text(
                    "If changes are made, we’ll update the “Last Updated” date at the top of this \
                     page. Continued use of the app means you accept the new Terms.",
                )]),
            ],
        },
        LegalSection {
            heading: "11. Contact Us",
            blocks: &[
                Paragraph(&[Text(
                    "If you have any questions or feedback about these Terms, you can contact us at:",
                )]),
                ContactLink,
            ],
        },
    ],
};

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn section_number(heading: &str) -> Option<usize> {
        heading.split_once(". ").and_then(|(n, _)| n.parse().ok())
    }

    #[test]
    fn sections_are_numbered_in_order() {
        for doc in [&PRIVACY_POLICY, &TERMS_OF_SERVICE] {
            let numbers: Vec<Option<usize>> =
                doc.sections.iter().map(|s| section_number(s.heading)).collect();
            let expected: Vec<Option<usize>> = (1..=11).map(Some).collect();
            assert_eq!(numbers, expected, "{}", doc.slug);
        }
    }

    #[test]
    fn documents_end_with_contact_link() {
        for doc in [&PRIVACY_POLICY, &TERMS_OF_SERVICE] {
            let last = doc.sections.last().map(|s| (s.heading, s.blocks.last()));
            assert_eq!(last, Some(("11. Contact Us", Some(&ContactLink))));
        }
    }

    #[test]
    fn terms_point_to_privacy_page() {
        let links: Vec<Route> = TERMS_OF_SERVICE
            .sections
            .iter()
            .flat_map(|s| s.blocks.iter())
            .filter_map(|b| match b {
                Paragraph(inlines) | Callout(inlines) => Some(inlines.iter()),
                _ => None,
            })
            .flatten()
            .filter_map(|i| match i {
                Inline::Link { route, .. } => Some(*route),
                _ => None,
            })
            .collect();
        assert_eq!(links, vec![Route::Privacy]);
    }

    #[test]
    fn both_documents_share_a_date() {
        assert_eq!(PRIVACY_POLICY.last_updated, TERMS_OF_SERVICE.last_updated);
        assert_eq!(PRIVACY_POLICY.page_title, "Privacy Policy - Chapterly");
    }
}
