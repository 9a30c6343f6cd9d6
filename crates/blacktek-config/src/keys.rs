//! Enumerated setting keys, one closed enum per value family.
//!
//! Each family indexes a fixed-size slot container in the store. Keys
//! are dense (`0..COUNT`), so a typed key is always in range; raw
//! indices coming from scripts go through `TryFrom<usize>` or the
//! store's `*_at` accessors, which check the bound.

use crate::ConfigError;
use std::fmt;
use std::str::FromStr;

/// Common surface of the four key families.
pub trait ConfigKey: Copy + fmt::Debug {
    /// Family label used in diagnostics (`string`, `integer`, ...).
    const FAMILY: &'static str;
    /// Number of keys in the family; valid indices are `0..COUNT`.
    const COUNT: usize;

    /// Slot index of this key.
    fn index(self) -> usize;
}

macro_rules! config_keys {
    (
        $(#[$meta:meta])*
        $name:ident ($family:literal) {
            $($variant:ident => $label:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum $name {
            $($variant,)+
        }

        impl $name {
            /// Every key of the family in index order.
            pub const ALL: &'static [$name] = &[$($name::$variant,)+];
            /// Number of keys in the family.
            pub const COUNT: usize = Self::ALL.len();

            /// Slot index of this key.
            pub const fn index(self) -> usize {
                self as usize
            }

            /// Script-facing name of the key.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }
        }

        impl ConfigKey for $name {
            const FAMILY: &'static str = $family;
            const COUNT: usize = $name::COUNT;

            fn index(self) -> usize {
                $name::index(self)
            }
        }

        impl TryFrom<usize> for $name {
            type Error = ConfigError;

            fn try_from(index: usize) -> Result<Self, Self::Error> {
                Self::ALL
                    .get(index)
                    .copied()
                    .ok_or(ConfigError::InvalidKey {
                        family: $family,
                        index,
                    })
            }
        }

        impl FromStr for $name {
            type Err = ConfigError;

            fn from_str(name: &str) -> Result<Self, Self::Err> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|key| key.as_str() == name)
                    .ok_or_else(|| ConfigError::UnknownKey {
                        family: $family,
                        name: name.to_string(),
                    })
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

config_keys! {
    /// String-valued settings.
    StringKey("string") {
        ConfigFile => "CONFIG_FILE",
        Ip => "IP",
        MapName => "MAP_NAME",
        MapAuthor => "MAP_AUTHOR",
        HouseRentPeriod => "HOUSE_RENT_PERIOD",
        MysqlHost => "MYSQL_HOST",
        MysqlUser => "MYSQL_USER",
        MysqlPass => "MYSQL_PASS",
        MysqlDb => "MYSQL_DB",
        MysqlSock => "MYSQL_SOCK",
        AccountManagerAuth => "ACCOUNT_MANAGER_AUTH",
        DefaultPriority => "DEFAULT_PRIORITY",
        ServerName => "SERVER_NAME",
        OwnerName => "OWNER_NAME",
        OwnerEmail => "OWNER_EMAIL",
        Url => "URL",
        Location => "LOCATION",
        Motd => "MOTD",
        WorldType => "WORLD_TYPE",
    }
}

config_keys! {
    /// Integer-valued settings.
    IntegerKey("integer") {
        SqlPort => "SQL_PORT",
        GamePort => "GAME_PORT",
        LoginPort => "LOGIN_PORT",
        StatusPort => "STATUS_PORT",
        MarketOfferDuration => "MARKET_OFFER_DURATION",
        AccountManagerPosX => "ACCOUNT_MANAGER_POS_X",
        AccountManagerPosY => "ACCOUNT_MANAGER_POS_Y",
        AccountManagerPosZ => "ACCOUNT_MANAGER_POS_Z",
        MaxPlayers => "MAX_PLAYERS",
        PzLocked => "PZ_LOCKED",
        DefaultDespawnRange => "DEFAULT_DESPAWNRANGE",
        DefaultDespawnRadius => "DEFAULT_DESPAWNRADIUS",
        DefaultWalkToSpawnRadius => "DEFAULT_WALKTOSPAWNRADIUS",
        RateExperience => "RATE_EXPERIENCE",
        RateSkill => "RATE_SKILL",
        RateLoot => "RATE_LOOT",
        RateMagic => "RATE_MAGIC",
        RateSpawn => "RATE_SPAWN",
        HousePrice => "HOUSE_PRICE",
        KillsToRed => "KILLS_TO_RED",
        KillsToBlack => "KILLS_TO_BLACK",
        ActionsDelayInterval => "ACTIONS_DELAY_INTERVAL",
        ExActionsDelayInterval => "EX_ACTIONS_DELAY_INTERVAL",
        MaxMessageBuffer => "MAX_MESSAGEBUFFER",
        KickAfterMinutes => "KICK_AFTER_MINUTES",
        ProtectionLevel => "PROTECTION_LEVEL",
        DeathLosePercent => "DEATH_LOSE_PERCENT",
        StatusQueryTimeout => "STATUSQUERY_TIMEOUT",
        FragTime => "FRAG_TIME",
        WhiteSkullTime => "WHITE_SKULL_TIME",
        StairhopDelay => "STAIRHOP_DELAY",
        ExpFromPlayersLevelRange => "EXP_FROM_PLAYERS_LEVEL_RANGE",
        CheckExpiredMarketOffersEachMinutes => "CHECK_EXPIRED_MARKET_OFFERS_EACH_MINUTES",
        MaxMarketOffersAtATimePerPlayer => "MAX_MARKET_OFFERS_AT_A_TIME_PER_PLAYER",
        MaxPacketsPerSecond => "MAX_PACKETS_PER_SECOND",
        ServerSaveNotifyDuration => "SERVER_SAVE_NOTIFY_DURATION",
        YellMinimumLevel => "YELL_MINIMUM_LEVEL",
        MinimumLevelToSendPrivate => "MINIMUM_LEVEL_TO_SEND_PRIVATE",
        VipFreeLimit => "VIP_FREE_LIMIT",
        VipPremiumLimit => "VIP_PREMIUM_LIMIT",
        DepotFreeLimit => "DEPOT_FREE_LIMIT",
        DepotPremiumLimit => "DEPOT_PREMIUM_LIMIT",
    }
}

config_keys! {
    /// Boolean settings.
    BooleanKey("boolean") {
        BindOnlyGlobalAddress => "BIND_ONLY_GLOBAL_ADDRESS",
        OptimizeDatabase => "OPTIMIZE_DATABASE",
        AllowChangeOutfit => "ALLOW_CHANGEOUTFIT",
        OnePlayerOnAccount => "ONE_PLAYER_ON_ACCOUNT",
        AimbotHotkeyEnabled => "AIMBOT_HOTKEY_ENABLED",
        RemoveRuneCharges => "REMOVE_RUNE_CHARGES",
        RemoveWeaponAmmo => "REMOVE_WEAPON_AMMO",
        RemoveWeaponCharges => "REMOVE_WEAPON_CHARGES",
        RemovePotionCharges => "REMOVE_POTION_CHARGES",
        ExperienceFromPlayers => "EXPERIENCE_FROM_PLAYERS",
        FreePremium => "FREE_PREMIUM",
        ReplaceKickOnLogin => "REPLACE_KICK_ON_LOGIN",
        AllowClones => "ALLOW_CLONES",
        AllowWalkthrough => "ALLOW_WALKTHROUGH",
        MarketPremium => "MARKET_PREMIUM",
        EmoteSpells => "EMOTE_SPELLS",
        StaminaSystem => "STAMINA_SYSTEM",
        WarnUnsafeScripts => "WARN_UNSAFE_SCRIPTS",
        ConvertUnsafeScripts => "CONVERT_UNSAFE_SCRIPTS",
        ClassicEquipmentSlots => "CLASSIC_EQUIPMENT_SLOTS",
        ClassicAttackSpeed => "CLASSIC_ATTACK_SPEED",
        ScriptsConsoleLogs => "SCRIPTS_CONSOLE_LOGS",
        ServerSaveNotifyMessage => "SERVER_SAVE_NOTIFY_MESSAGE",
        ServerSaveCleanMap => "SERVER_SAVE_CLEAN_MAP",
        ServerSaveClose => "SERVER_SAVE_CLOSE",
        ServerSaveShutdown => "SERVER_SAVE_SHUTDOWN",
        OnlineOfflineCharlist => "ONLINE_OFFLINE_CHARLIST",
        YellAllowPremium => "YELL_ALLOW_PREMIUM",
        PremiumToSendPrivate => "PREMIUM_TO_SEND_PRIVATE",
        ForceMonsterTypeLoad => "FORCE_MONSTERTYPE_LOAD",
        DefaultWorldLight => "DEFAULT_WORLD_LIGHT",
        HouseOwnedByAccount => "HOUSE_OWNED_BY_ACCOUNT",
        LuaItemDesc => "LUA_ITEM_DESC",
        CleanProtectionZones => "CLEAN_PROTECTION_ZONES",
        HouseDoorShowPrice => "HOUSE_DOOR_SHOW_PRICE",
        OnlyInvitedCanMoveHouseItems => "ONLY_INVITED_CAN_MOVE_HOUSE_ITEMS",
        RemoveOnDespawn => "REMOVE_ON_DESPAWN",
        PlayerConsoleLogs => "PLAYER_CONSOLE_LOGS",
        CheckDuplicateStorageKeys => "CHECK_DUPLICATE_STORAGE_KEYS",
        BedOfflineTraining => "BED_OFFLINE_TRAINING",
        AugmentSlotProtection => "AUGMENT_SLOT_PROTECTION",
        AugmentStaminaRule => "AUGMENT_STAMINA_RULE",
        AugmentCriticalAnimation => "AUGMENT_CRITICAL_ANIMATION",
        NpcPzWalkthrough => "NPC_PZ_WALKTHROUGH",
        EnableAccountManager => "ENABLE_ACCOUNT_MANAGER",
        EnableNoPassLogin => "ENABLE_NO_PASS_LOGIN",
    }
}

config_keys! {
    /// Float-valued settings.
    FloatKey("float") {
        RewardBaseRate => "REWARD_BASE_RATE",
        RewardRateDamageDone => "REWARD_RATE_DAMAGE_DONE",
        RewardRateDamageTaken => "REWARD_RATE_DAMAGE_TAKEN",
        RewardRateHealingDone => "REWARD_RATE_HEALING_DONE",
    }
}
