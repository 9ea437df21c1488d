//! Fixture dataset loaded into a seeded store
//!
//! User 1 is the default viewer. Joined flags and reactions of the fixture
//! are recorded as user-1 memberships and reactions, so counters and
//! per-viewer state agree from the start.

use chrono::{DateTime, NaiveDate, Utc};
use murmur_core::{
    Circle, Comment, EntityId, Murmur, ReactionCounts, ReactionKind, ReactionTarget, User,
};

use crate::memory::Tables;

/// Wallet address of the seeded viewer
pub const SEED_VIEWER_ADDRESS: &str = "0x1234567890abcdef";

/// Id of the seeded viewer
pub const SEED_VIEWER_ID: EntityId = EntityId::new(1);

const USERS: &[(i64, &str, &str)] = &[
    (1, "0x1234567890abcdef", "吐槽达人"),
    (2, "0xabcdef1234567890", "匿名用户"),
    (3, "0x9876543210fedcba", "圈内老司机"),
    (4, "0xfedcba0987654321", "新手上路"),
    (5, "0x1111222233334444", "技术大牛"),
    (6, "0x5555666677778888", "产品经理"),
    (7, "0x9999aaaabbbbcccc", "设计师小王"),
    (8, "0xdddd1111eeee2222", "运营小张"),
];

struct CircleRow {
    id: i64,
    name: &'static str,
    description: &'static str,
    members: u64,
    created: (i32, u32, u32, u32, u32),
    joined: bool,
}

const CIRCLES: &[CircleRow] = &[
    CircleRow { id: 1, name: "程序员吐槽大会", description: "程序员们的日常吐槽，代码bug、产品需求、加班生活...", members: 89, created: (2024, 1, 15, 10, 0), joined: false },
    CircleRow { id: 2, name: "学生党吐槽圈", description: "学生们的学习生活吐槽，作业、考试、宿舍生活", members: 890, created: (2024, 1, 20, 14, 30), joined: true },
    CircleRow { id: 3, name: "打工人吐槽圈", description: "职场打工人的日常，工作压力、同事关系、薪资待遇", members: 2100, created: (2024, 1, 10, 9, 15), joined: false },
    CircleRow { id: 4, name: "游戏玩家吐槽圈", description: "游戏玩家的游戏体验分享，bug吐槽、平衡性讨论", members: 750, created: (2024, 1, 25, 16, 45), joined: true },
    CircleRow { id: 5, name: "美食爱好者吐槽圈", description: "美食相关的吐槽，餐厅服务、外卖体验、厨艺分享", members: 450, created: (2024, 2, 1, 12, 0), joined: false },
    CircleRow { id: 6, name: "健身达人吐槽圈", description: "健身路上的酸甜苦辣，器材、教练、饮食控制", members: 680, created: (2024, 2, 5, 8, 30), joined: true },
    CircleRow { id: 7, name: "宠物主人吐槽圈", description: "铲屎官的日常，宠物拆家、看病、训练", members: 920, created: (2024, 2, 8, 15, 45), joined: true },
    CircleRow { id: 8, name: "旅行者吐槽圈", description: "旅行中的各种遭遇，航班延误、酒店服务、景点坑", members: 750, created: (2024, 2, 12, 11, 20), joined: false },
    CircleRow { id: 9, name: "电影爱好者吐槽圈", description: "观影体验分享，烂片吐槽、好片推荐、影院服务", members: 1100, created: (2024, 2, 15, 19, 0), joined: true },
    CircleRow { id: 10, name: "音乐人吐槽圈", description: "音乐创作和表演的酸甜苦辣，设备、演出、版权", members: 320, created: (2024, 2, 18, 14, 15), joined: false },
    CircleRow { id: 11, name: "读书人吐槽圈", description: "阅读体验分享，好书推荐、烂书避雷、书店服务", members: 850, created: (2024, 2, 22, 10, 30), joined: true },
    CircleRow { id: 12, name: "摄影爱好者吐槽圈", description: "摄影路上的各种坑，设备、后期、客户要求", members: 640, created: (2024, 2, 25, 16, 45), joined: false },
    CircleRow { id: 13, name: "咖啡控吐槽圈", description: "咖啡文化分享，豆子、设备、咖啡店体验", members: 480, created: (2024, 2, 28, 9, 15), joined: true },
    CircleRow { id: 14, name: "科技数码吐槽圈", description: "数码产品使用体验，新品发布、系统更新、客服", members: 1350, created: (2024, 3, 2, 13, 20), joined: true },
    CircleRow { id: 15, name: "汽车爱好者吐槽圈", description: "汽车相关话题，购车、保养、驾驶体验", members: 780, created: (2024, 3, 5, 17, 30), joined: false },
    CircleRow { id: 16, name: "家居装修吐槽圈", description: "装修路上的各种坑，材料、工人、设计", members: 420, created: (2024, 3, 8, 12, 0), joined: true },
    CircleRow { id: 17, name: "育儿经验吐槽圈", description: "带娃路上的酸甜苦辣，教育、医疗、生活", members: 950, created: (2024, 3, 12, 8, 45), joined: false },
    CircleRow { id: 18, name: "投资理财吐槽圈", description: "投资路上的各种坑，股票、基金、理财产品", members: 680, created: (2024, 3, 15, 15, 30), joined: true },
    CircleRow { id: 19, name: "运动健身吐槽圈", description: "各种运动的体验分享，装备、教练、场地", members: 720, created: (2024, 3, 18, 11, 15), joined: false },
    CircleRow { id: 20, name: "二次元吐槽圈", description: "动漫、游戏、手办相关话题，新番、活动、周边", members: 1200, created: (2024, 3, 22, 20, 0), joined: true },
];

struct PostRow {
    id: i64,
    parent: i64,
    author: i64,
    content: &'static str,
    created: (i32, u32, u32, u32, u32),
    counts: (u64, u64),
    viewer_reaction: Option<ReactionKind>,
}

const MURMURS: &[PostRow] = &[
    PostRow { id: 1, parent: 1, author: 1, content: "今天又遇到了一个奇怪的bug，明明代码逻辑没问题，但就是报错。最后发现是数据类型转换的问题，浪费了我两个小时😤", created: (2024, 2, 10, 9, 30), counts: (15, 2), viewer_reaction: Some(ReactionKind::Like) },
    PostRow { id: 2, parent: 2, author: 2, content: "这学期的作业量真的是太多了，每天都要熬夜到很晚。老师还要求我们每门课都要写5000字的论文，感觉时间完全不够用😭", created: (2024, 2, 10, 13, 45), counts: (28, 1), viewer_reaction: None },
    PostRow { id: 3, parent: 4, author: 3, content: "新出的这个游戏平衡性太差了，某些角色强得离谱，完全没法玩。官方什么时候能修复一下？", created: (2024, 2, 10, 15, 20), counts: (42, 5), viewer_reaction: Some(ReactionKind::Dislike) },
    PostRow { id: 4, parent: 1, author: 4, content: "产品经理又改需求了，说这个功能不够炫酷，要重新设计。我们之前的工作都白做了，又要加班了😫", created: (2024, 2, 10, 17, 10), counts: (33, 3), viewer_reaction: Some(ReactionKind::Like) },
    PostRow { id: 5, parent: 2, author: 1, content: "宿舍的网速真的太慢了，看个视频都要缓冲半天。学校什么时候能升级一下网络设备？", created: (2024, 2, 10, 18, 30), counts: (19, 0), viewer_reaction: None },
];

const COMMENTS: &[PostRow] = &[
    PostRow { id: 1, parent: 1, author: 2, content: "哈哈，这个bug我也遇到过，调试了一整天", created: (2024, 2, 10, 10, 30), counts: (5, 0), viewer_reaction: Some(ReactionKind::Like) },
    PostRow { id: 2, parent: 1, author: 3, content: "建议用try-catch包装一下，避免程序崩溃", created: (2024, 2, 10, 11, 15), counts: (8, 1), viewer_reaction: None },
    PostRow { id: 3, parent: 2, author: 1, content: "同感，现在的作业量确实有点多", created: (2024, 2, 10, 14, 20), counts: (3, 0), viewer_reaction: Some(ReactionKind::Like) },
    PostRow { id: 4, parent: 3, author: 4, content: "这个游戏确实有很多问题，希望官方能修复", created: (2024, 2, 10, 16, 45), counts: (12, 2), viewer_reaction: Some(ReactionKind::Like) },
];

fn at((year, month, day, hour, minute): (i32, u32, u32, u32, u32)) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, minute, 0))
        .map(|dt| dt.and_utc())
        .unwrap_or_default()
}

/// Build the fixture tables
pub(crate) fn tables() -> Tables {
    let mut tables = Tables::default();

    for &(id, address, nickname) in USERS {
        let id = EntityId::new(id);
        let user = User::new(id, address.to_string())
            .with_nickname(nickname)
            .with_avatar(format!(
                "https://api.dicebear.com/7.x/avataaars/svg?seed=user{id}"
            ));
        tables.addresses.insert(address.to_string(), id);
        tables.users.insert(id, user);
    }

    for row in CIRCLES {
        let id = EntityId::new(row.id);
        let mut circle = Circle::new(id, row.name.to_string(), Some(row.description.to_string()));
        circle.member_count = row.members;
        circle.created_at = at(row.created);
        if row.joined {
            tables.memberships.insert((id, SEED_VIEWER_ID));
        }
        tables.circles.insert(id, circle);
    }

    for row in MURMURS {
        let id = EntityId::new(row.id);
        let mut murmur = Murmur::new(
            id,
            EntityId::new(row.parent),
            EntityId::new(row.author),
            row.content.to_string(),
        );
        murmur.created_at = at(row.created);
        murmur.counts = ReactionCounts::new(row.counts.0, row.counts.1);
        if let Some(kind) = row.viewer_reaction {
            tables
                .reactions
                .insert((SEED_VIEWER_ID, ReactionTarget::murmur(id)), kind);
        }
        tables.murmurs.insert(id, murmur);
    }

    for row in COMMENTS {
        let id = EntityId::new(row.id);
        let murmur_id = EntityId::new(row.parent);
        let mut comment = Comment::new(
            id,
            murmur_id,
            EntityId::new(row.author),
            row.content.to_string(),
        );
        comment.created_at = at(row.created);
        comment.counts = ReactionCounts::new(row.counts.0, row.counts.1);
        if let Some(kind) = row.viewer_reaction {
            tables
                .reactions
                .insert((SEED_VIEWER_ID, ReactionTarget::comment(id)), kind);
        }
        if let Some(murmur) = tables.murmurs.get_mut(murmur_id) {
            murmur.attach_comment(id);
        }
        tables.comments.insert(id, comment);
    }

    tables
}
