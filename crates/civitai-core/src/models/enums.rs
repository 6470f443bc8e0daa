//! Enumerations with fixed wire strings.
//!
//! Every enum here parses only its exact wire spelling. An unknown value is a
//! [`CivitaiError::Validation`] naming the wire field it came from.

use crate::error::CivitaiError;

macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident in $field:literal {
            $( $(#[$vmeta:meta])* $variant:ident => $wire:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Wire spelling of this value.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $wire,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = CivitaiError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($wire => Ok($name::$variant),)+
                    other => Err(CivitaiError::validation(
                        $field,
                        format!("unknown {} '{}'", stringify!($name), other),
                    )),
                }
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }
    };
}

wire_enum! {
    /// Kind of resource a model provides.
    pub enum ModelType in "type" {
        Checkpoint => "Checkpoint",
        TextualInversion => "TextualInversion",
        Hypernetwork => "Hypernetwork",
        AestheticGradient => "AestheticGradient",
        Lora => "LORA",
        Controlnet => "Controlnet",
        Poses => "Poses",
        LoCon => "LoCon",
        Wildcards => "Wildcards",
        Workflows => "Workflows",
        Other => "Other",
        Vae => "VAE",
        MotionModule => "MotionModule",
        DoRA => "DoRA",
    }
}

wire_enum! {
    /// Moderation state of a model. Absent for normally published models.
    pub enum ModelMode in "mode" {
        Archived => "Archived",
        TakenDown => "TakenDown",
    }
}

wire_enum! {
    /// Known base-model families a version can be trained on.
    ///
    /// A version's `baseModel` is free-form text; this is what it is matched
    /// against, see [`ModelVersion::base_model_family`](super::ModelVersion::base_model_family).
    pub enum BaseModel in "baseModel" {
        Sd14 => "SD 1.4",
        Sd15 => "SD 1.5",
        Sd15Lcm => "SD 1.5 LCM",
        Sd15Hyper => "SD 1.5 Hyper",
        Sd20 => "SD 2.0",
        Sd21 => "SD 2.1",
        Sdxl10 => "SDXL 1.0",
        Sd3 => "SD 3",
        Sd35 => "SD 3.5",
        SdxlTurbo => "SDXL Turbo",
        SdxlLightning => "SDXL Lightning",
        SdxlHyper => "SDXL Hyper",
        StableCascade => "Stable Cascade",
        Svd => "SVD",
        SvdXt => "SVD XT",
        PlaygroundV2 => "Playground V2",
        PixArtA => "PixArt A",
        PixArtSigma => "PixArt Σ",
        Hunyuan1 => "Hunyuan 1",
        Lumina => "Lumina",
        Pony => "Pony",
        Flux1S => "Flux.1 S",
        Flux1D => "Flux.1 D",
        Illustrious => "Illustrious",
        NoobAi => "NoobAI",
        Other => "Other",
    }
}

wire_enum! {
    /// Sort order for model listings.
    pub enum ModelSort in "sortBy" {
        HighestRated => "Highest Rated",
        MostDownloaded => "Most Downloaded",
        Newest => "Newest",
    }
}

wire_enum! {
    /// Time window used when sorting models or images.
    pub enum Period in "period" {
        AllTime => "AllTime",
        Year => "Year",
        Month => "Month",
        Week => "Week",
        Day => "Day",
    }
}

wire_enum! {
    pub enum ModelCategory in "category" {
        Action => "Action",
        Animal => "Animal",
        Assets => "Assets",
        Background => "Background",
        BaseModel => "Base Model",
        Buildings => "Buildings",
        Celebrity => "Celebrity",
        Character => "Character",
        Clothing => "Clothing",
        Concept => "Concept",
        Guide => "Guide",
        Objects => "Objects",
        Poses => "Poses",
        Style => "Style",
        Tool => "Tool",
        Vehicle => "Vehicle",
    }
}

wire_enum! {
    /// Commercial-use permission a model grants.
    pub enum CommercialUse in "allowCommercialUse" {
        None => "None",
        Image => "Image",
        Rent => "Rent",
        Sell => "Sell",
    }
}

wire_enum! {
    /// Sort order for image listings.
    pub enum ImageSort in "sort" {
        MostReactions => "Most Reactions",
        MostComments => "Most Comments",
        Newest => "Newest",
    }
}

wire_enum! {
    /// Hash algorithms the API reports for version files.
    ///
    /// Any of these digests can be used with
    /// [`ModelVersionsApi::get_by_hash`](crate::api::ModelVersionsApi::get_by_hash).
    pub enum HashAlgorithm in "hashes" {
        AutoV1 => "AutoV1",
        AutoV2 => "AutoV2",
        Sha256 => "SHA256",
        Crc32 => "CRC32",
        Blake3 => "BLAKE3",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_strings_round_trip() {
        for t in ModelType::ALL {
            assert_eq!(t.as_str().parse::<ModelType>().unwrap(), *t);
        }
        for b in BaseModel::ALL {
            assert_eq!(b.as_str().parse::<BaseModel>().unwrap(), *b);
        }
        assert_eq!(ModelType::ALL.len(), 14);
        assert_eq!(ModelCategory::ALL.len(), 16);
    }

    #[test]
    fn test_model_type_wire_spelling() {
        assert_eq!(ModelType::Lora.as_str(), "LORA");
        assert_eq!(ModelType::Controlnet.to_string(), "Controlnet");
        assert_eq!(ModelSort::HighestRated.as_str(), "Highest Rated");
        assert_eq!(CommercialUse::None.as_str(), "None");
    }

    #[test]
    fn test_unknown_value_is_validation_error() {
        let err = "Lora".parse::<ModelType>().unwrap_err();
        match err {
            CivitaiError::Validation { field, message } => {
                assert_eq!(field, "type");
                assert!(message.contains("Lora"));
            }
            other => panic!("unexpected error: {other:?}"),
        }

        let err = "Deleted".parse::<ModelMode>().unwrap_err();
        assert!(matches!(err, CivitaiError::Validation { ref field, .. } if field == "mode"));
    }

    #[test]
    fn test_serializes_as_wire_string() {
        let json = serde_json::to_string(&Period::AllTime).unwrap();
        assert_eq!(json, "\"AllTime\"");
    }
}
