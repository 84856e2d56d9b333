//! Static soil profile data: nutrient attributes and candidate crops with
//! their growth timelines, one entry per canonical soil type.

use crate::models::{CropCandidate, NutrientLevel, SoilProfile, SoilType, TimelineStage};

pub static PROFILES: [SoilProfile; 6] = [
    SoilProfile {
        soil: SoilType::Loamy,
        ph: 6.5,
        nitrogen: NutrientLevel::Medium,
        phosphorus: NutrientLevel::High,
        potassium: NutrientLevel::Medium,
        moisture: "Good",
        texture: "Well-balanced mixture of sand, silt, and clay with good drainage",
        crops: &[
            CropCandidate {
                name: "Tomatoes",
                base_suitability: 95,
                reason: "Loamy soil holds nutrients and drains well, ideal for fruiting crops.",
                growth_timeline: &[
                    TimelineStage {
                        stage: "Seed Germination",
                        duration: "5–10 days",
                        description: "Sow seeds 1/4 inch deep in seed trays or plugs.",
                    },
                    TimelineStage {
                        stage: "Seedling Development",
                        duration: "3–4 weeks",
                        description: "Transplant when 6–8 inches tall with several true leaves.",
                    },
                    TimelineStage {
                        stage: "Vegetative Growth",
                        duration: "4–6 weeks",
                        description: "Stake plants and fertilize regularly to support strong growth.",
                    },
                    TimelineStage {
                        stage: "Flowering & Fruiting",
                        duration: "4–8 weeks",
                        description: "Maintain consistent moisture; fruits set and ripen.",
                    },
                    TimelineStage {
                        stage: "Harvest",
                        duration: "Ongoing",
                        description: "Pick fully colored but firm fruits regularly.",
                    },
                ],
            },
            CropCandidate {
                name: "Wheat",
                base_suitability: 90,
                reason: "Loamy fields provide ideal aeration and root depth.",
                growth_timeline: &[
                    TimelineStage {
                        stage: "Planting",
                        duration: "1 day",
                        description: "Drill seeds 1–2 inches deep in prepared seedbed.",
                    },
                    TimelineStage {
                        stage: "Tillering",
                        duration: "3–4 weeks",
                        description: "Multiple shoots develop from the base of the plant.",
                    },
                    TimelineStage {
                        stage: "Stem Extension & Heading",
                        duration: "4–6 weeks",
                        description: "Stems elongate and grain heads emerge.",
                    },
                    TimelineStage {
                        stage: "Grain Filling",
                        duration: "4–6 weeks",
                        description: "Kernels expand and harden.",
                    },
                    TimelineStage {
                        stage: "Harvest",
                        duration: "3–5 days",
                        description: "Harvest when grain is golden and moisture is around 13–14%.",
                    },
                ],
            },
            CropCandidate {
                name: "Carrots",
                base_suitability: 88,
                reason: "Fine, loose structure lets taproots grow straight and deep.",
                growth_timeline: &[
                    TimelineStage {
                        stage: "Seed Planting",
                        duration: "1 day",
                        description: "Sow seeds shallowly (about 1/4 inch) in rows.",
                    },
                    TimelineStage {
                        stage: "Germination",
                        duration: "14–21 days",
                        description: "Keep soil moist until seedlings appear.",
                    },
                    TimelineStage {
                        stage: "Root Development",
                        duration: "8–10 weeks",
                        description: "Roots thicken underground; thin plants to proper spacing.",
                    },
                    TimelineStage {
                        stage: "Harvest",
                        duration: "2–3 weeks window",
                        description: "Pull when roots reach desired diameter and color.",
                    },
                ],
            },
        ],
    },
    SoilProfile {
        soil: SoilType::Clayey,
        ph: 7.2,
        nitrogen: NutrientLevel::High,
        phosphorus: NutrientLevel::Medium,
        potassium: NutrientLevel::High,
        moisture: "High",
        texture: "Heavy soil with fine particles, high water-holding capacity",
        crops: &[
            CropCandidate {
                name: "Rice",
                base_suitability: 95,
                reason: "Clayey paddies retain water, perfect for flooded rice systems.",
                growth_timeline: &[
                    TimelineStage {
                        stage: "Seed Preparation",
                        duration: "1–2 days",
                        description: "Soak and pre-germinate seeds in water.",
                    },
                    TimelineStage {
                        stage: "Nursery / Seedling Stage",
                        duration: "2–3 weeks",
                        description: "Grow seedlings densely in a nursery plot.",
                    },
                    TimelineStage {
                        stage: "Transplanting & Tillering",
                        duration: "3–5 weeks",
                        description: "Transplant to puddled field; multiple tillers form.",
                    },
                    TimelineStage {
                        stage: "Panicle Development & Grain Fill",
                        duration: "6–8 weeks",
                        description: "Grain heads emerge and kernels mature.",
                    },
                    TimelineStage {
                        stage: "Harvest",
                        duration: "5–7 days",
                        description: "Harvest when straw is yellow and grains are hard.",
                    },
                ],
            },
            CropCandidate {
                name: "Cabbage",
                base_suitability: 85,
                reason: "Moist, fertile clay supports large leafy heads.",
                growth_timeline: &[
                    TimelineStage {
                        stage: "Seed Starting",
                        duration: "1 day",
                        description: "Start seeds in trays 6–8 weeks before transplanting.",
                    },
                    TimelineStage {
                        stage: "Seedling Growth",
                        duration: "4–6 weeks",
                        description: "Grow sturdy transplants with strong stems.",
                    },
                    TimelineStage {
                        stage: "Head Formation",
                        duration: "8–12 weeks",
                        description: "Outer leaves wrap to form a solid head.",
                    },
                    TimelineStage {
                        stage: "Harvest",
                        duration: "1–2 weeks window",
                        description: "Cut when heads are firm and compact.",
                    },
                ],
            },
            CropCandidate {
                name: "Broccoli",
                base_suitability: 88,
                reason: "Cool, moist clayey soils are favorable for brassicas.",
                growth_timeline: &[
                    TimelineStage {
                        stage: "Nursery Stage",
                        duration: "4–6 weeks",
                        description: "Raise seedlings in trays or nursery beds.",
                    },
                    TimelineStage {
                        stage: "Vegetative Growth",
                        duration: "6–8 weeks",
                        description: "Plants form large leaves and thick stems.",
                    },
                    TimelineStage {
                        stage: "Head Formation",
                        duration: "2–3 weeks",
                        description: "Central head develops at the top of the stem.",
                    },
                    TimelineStage {
                        stage: "Harvest",
                        duration: "Ongoing",
                        description: "Cut main head before florets loosen; side shoots follow.",
                    },
                ],
            },
        ],
    },
    SoilProfile {
        soil: SoilType::Sandy,
        ph: 6.0,
        nitrogen: NutrientLevel::Low,
        phosphorus: NutrientLevel::Medium,
        potassium: NutrientLevel::Low,
        moisture: "Low",
        texture: "Very coarse particles with rapid drainage and low nutrient retention",
        crops: &[
            CropCandidate {
                name: "Potatoes",
                base_suitability: 90,
                reason: "Loose sand lets tubers expand and reduces risk of rot.",
                growth_timeline: &[
                    TimelineStage {
                        stage: "Planting",
                        duration: "1 day",
                        description: "Plant seed tubers 4 inches deep on ridges.",
                    },
                    TimelineStage {
                        stage: "Sprouting",
                        duration: "2–3 weeks",
                        description: "Shoots emerge and rows become visible.",
                    },
                    TimelineStage {
                        stage: "Tuber Initiation",
                        duration: "2–3 weeks",
                        description: "Small tubers begin forming underground.",
                    },
                    TimelineStage {
                        stage: "Tuber Bulking & Maturation",
                        duration: "8–10 weeks",
                        description: "Tubers enlarge; vines gradually yellow.",
                    },
                    TimelineStage {
                        stage: "Harvest",
                        duration: "3–5 days",
                        description: "Dig when foliage is dry and skins are firm.",
                    },
                ],
            },
            CropCandidate {
                name: "Carrots",
                base_suitability: 88,
                reason: "Deep sandy beds prevent forked or twisted roots.",
                growth_timeline: &[
                    TimelineStage {
                        stage: "Sowing",
                        duration: "1 day",
                        description: "Sow thinly in rows and cover lightly.",
                    },
                    TimelineStage {
                        stage: "Germination",
                        duration: "14–21 days",
                        description: "Maintain moisture; sand dries quickly.",
                    },
                    TimelineStage {
                        stage: "Root Growth",
                        duration: "6–8 weeks",
                        description: "Roots lengthen and thicken in loose soil.",
                    },
                    TimelineStage {
                        stage: "Harvest",
                        duration: "Ongoing",
                        description: "Pull when roots reach desired size and color.",
                    },
                ],
            },
            CropCandidate {
                name: "Radishes",
                base_suitability: 85,
                reason: "Fast-maturing roots do well in warm, well-drained beds.",
                growth_timeline: &[
                    TimelineStage {
                        stage: "Planting",
                        duration: "1 day",
                        description: "Direct sow 1/2 inch deep with close spacing.",
                    },
                    TimelineStage {
                        stage: "Growth",
                        duration: "2–3 weeks",
                        description: "Roots swell quickly; avoid water stress.",
                    },
                    TimelineStage {
                        stage: "Harvest",
                        duration: "1 week window",
                        description: "Harvest promptly to avoid pithy roots.",
                    },
                ],
            },
        ],
    },
    SoilProfile {
        soil: SoilType::SandyLoam,
        ph: 6.2,
        nitrogen: NutrientLevel::Medium,
        phosphorus: NutrientLevel::Medium,
        potassium: NutrientLevel::Medium,
        moisture: "Moderate",
        texture: "Light soil with a mix of sand and finer particles, easy to work",
        crops: &[
            CropCandidate {
                name: "Groundnut (Peanut)",
                base_suitability: 92,
                reason: "Loose sandy loam allows pods to develop underground.",
                growth_timeline: &[
                    TimelineStage {
                        stage: "Sowing",
                        duration: "1 day",
                        description: "Plant seeds 1–2 inches deep in rows.",
                    },
                    TimelineStage {
                        stage: "Vegetative Growth",
                        duration: "3–4 weeks",
                        description: "Plants form spreading leafy canopy.",
                    },
                    TimelineStage {
                        stage: "Flowering & Pegging",
                        duration: "3–4 weeks",
                        description: "Flowers form and pegs enter the soil.",
                    },
                    TimelineStage {
                        stage: "Pod Development",
                        duration: "4–6 weeks",
                        description: "Pods expand underground in the loosened soil.",
                    },
                    TimelineStage {
                        stage: "Harvest",
                        duration: "1–2 weeks",
                        description: "Lift plants when most pods are filled and shells dry.",
                    },
                ],
            },
            CropCandidate {
                name: "Potatoes",
                base_suitability: 90,
                reason: "Good balance of drainage and moisture supports tuber growth.",
                growth_timeline: &[
                    TimelineStage {
                        stage: "Planting",
                        duration: "1 day",
                        description: "Plant seed tubers in ridges or beds.",
                    },
                    TimelineStage {
                        stage: "Vegetative Growth",
                        duration: "4–6 weeks",
                        description: "Plants produce foliage; hill soil around stems.",
                    },
                    TimelineStage {
                        stage: "Tuber Bulking",
                        duration: "6–8 weeks",
                        description: "Tubers increase in size underground.",
                    },
                    TimelineStage {
                        stage: "Harvest",
                        duration: "3–5 days",
                        description: "Harvest when tops yellow and soil is dry.",
                    },
                ],
            },
            CropCandidate {
                name: "Onion",
                base_suitability: 87,
                reason: "Loose structure lets bulbs swell evenly.",
                growth_timeline: &[
                    TimelineStage {
                        stage: "Planting",
                        duration: "1 day",
                        description: "Plant sets or seedlings in rows with good spacing.",
                    },
                    TimelineStage {
                        stage: "Bulb Formation",
                        duration: "4–6 weeks",
                        description: "Bulbs thicken at the base of the leaves.",
                    },
                    TimelineStage {
                        stage: "Maturity",
                        duration: "3–4 weeks",
                        description: "Necks soften and tops fall over naturally.",
                    },
                    TimelineStage {
                        stage: "Harvest & Curing",
                        duration: "1–2 weeks",
                        description: "Pull bulbs and dry thoroughly before storage.",
                    },
                ],
            },
        ],
    },
    SoilProfile {
        soil: SoilType::Alluvial,
        ph: 6.8,
        nitrogen: NutrientLevel::Medium,
        phosphorus: NutrientLevel::High,
        potassium: NutrientLevel::High,
        moisture: "Good",
        texture: "Fine, fertile river-deposited soil with deep profile",
        crops: &[
            CropCandidate {
                name: "Rice",
                base_suitability: 93,
                reason: "Fertile, level alluvial plains are ideal for irrigated rice.",
                growth_timeline: &[
                    TimelineStage {
                        stage: "Nursery Stage",
                        duration: "2–3 weeks",
                        description: "Raise seedlings in a small, well-watered area.",
                    },
                    TimelineStage {
                        stage: "Transplanting & Tillering",
                        duration: "3–5 weeks",
                        description: "Transplant to main field; multiple tillers develop.",
                    },
                    TimelineStage {
                        stage: "Panicle Development",
                        duration: "3–4 weeks",
                        description: "Grain heads form and emerge from the sheath.",
                    },
                    TimelineStage {
                        stage: "Grain Fill & Maturity",
                        duration: "4–5 weeks",
                        description: "Kernels harden and straw turns yellow.",
                    },
                    TimelineStage {
                        stage: "Harvest",
                        duration: "5–7 days",
                        description: "Cut and thresh when grains are fully mature.",
                    },
                ],
            },
            CropCandidate {
                name: "Sugarcane",
                base_suitability: 90,
                reason: "Deep alluvial soils support long-duration, high-biomass crop.",
                growth_timeline: &[
                    TimelineStage {
                        stage: "Setts Planting",
                        duration: "1–2 days",
                        description: "Plant stem cuttings in furrows at spacing.",
                    },
                    TimelineStage {
                        stage: "Tillering & Grand Growth",
                        duration: "6–10 months",
                        description: "Numerous stalks arise and grow rapidly.",
                    },
                    TimelineStage {
                        stage: "Ripening",
                        duration: "2–3 months",
                        description: "Sugar content increases in maturing canes.",
                    },
                    TimelineStage {
                        stage: "Harvest",
                        duration: "1–2 months window",
                        description: "Cut canes when juice is sweet and tops dry.",
                    },
                ],
            },
            CropCandidate {
                name: "Maize (Corn)",
                base_suitability: 88,
                reason: "High nutrient status favors vigorous maize growth.",
                growth_timeline: &[
                    TimelineStage {
                        stage: "Planting",
                        duration: "1 day",
                        description: "Sow seeds 1–2 inches deep in moist soil.",
                    },
                    TimelineStage {
                        stage: "Vegetative Growth",
                        duration: "4–6 weeks",
                        description: "Stalk height and leaf area increase rapidly.",
                    },
                    TimelineStage {
                        stage: "Tasseling & Silking",
                        duration: "2–3 weeks",
                        description: "Male and female flowers appear and pollinate.",
                    },
                    TimelineStage {
                        stage: "Grain Filling & Harvest",
                        duration: "4–5 weeks",
                        description: "Kernels fill and ears are harvested at full size.",
                    },
                ],
            },
        ],
    },
    SoilProfile {
        soil: SoilType::Laterite,
        ph: 5.5,
        nitrogen: NutrientLevel::Low,
        phosphorus: NutrientLevel::Low,
        potassium: NutrientLevel::Medium,
        moisture: "Moderate",
        texture: "Reddish, iron-rich soil, often on slopes with good drainage",
        crops: &[
            CropCandidate {
                name: "Tea",
                base_suitability: 90,
                reason: "Acidic, well-drained laterite in high rainfall areas suits tea bushes.",
                growth_timeline: &[
                    TimelineStage {
                        stage: "Nursery Stage",
                        duration: "3–6 months",
                        description: "Grow seedlings or cuttings under shade.",
                    },
                    TimelineStage {
                        stage: "Field Planting",
                        duration: "1–2 weeks",
                        description: "Transplant to terraces with proper spacing.",
                    },
                    TimelineStage {
                        stage: "Bush Formation",
                        duration: "1–2 years",
                        description: "Regular pruning shapes low, pluckable bushes.",
                    },
                    TimelineStage {
                        stage: "Plucking",
                        duration: "Ongoing",
                        description: "Harvest tender 2–3 leaves and a bud at intervals.",
                    },
                ],
            },
            CropCandidate {
                name: "Coffee",
                base_suitability: 88,
                reason: "Shaded, lateritic uplands support deep-rooted coffee plants.",
                growth_timeline: &[
                    TimelineStage {
                        stage: "Seedling Raising",
                        duration: "6–9 months",
                        description: "Grow seedlings in bags with shade.",
                    },
                    TimelineStage {
                        stage: "Transplanting",
                        duration: "1–2 weeks",
                        description: "Plant along contours with shade trees.",
                    },
                    TimelineStage {
                        stage: "Vegetative Growth",
                        duration: "2–3 years",
                        description: "Framework branches and canopy develop.",
                    },
                    TimelineStage {
                        stage: "Flowering & Berry Development",
                        duration: "8–10 months",
                        description: "Flowers set berries which ripen to red.",
                    },
                    TimelineStage {
                        stage: "Harvest",
                        duration: "1–2 months",
                        description: "Pick ripe red berries for processing.",
                    },
                ],
            },
            CropCandidate {
                name: "Cashew",
                base_suitability: 85,
                reason: "Hardy trees thrive even on poor, lateritic slopes.",
                growth_timeline: &[
                    TimelineStage {
                        stage: "Planting",
                        duration: "1–2 days",
                        description: "Plant grafts or seedlings at wide spacing.",
                    },
                    TimelineStage {
                        stage: "Canopy Development",
                        duration: "2–3 years",
                        description: "Tree forms broad, spreading crown.",
                    },
                    TimelineStage {
                        stage: "Flowering & Fruiting",
                        duration: "3–4 months",
                        description: "Panicles bear flowers and nuts with apples.",
                    },
                    TimelineStage {
                        stage: "Harvest",
                        duration: "1–2 months",
                        description: "Collect fallen nuts and dry before storage.",
                    },
                ],
            },
        ],
    },
];
