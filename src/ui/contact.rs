/// Static brand contact panel.
use iced::widget::{column, container, horizontal_rule, row, text};
use iced::{Element, Length};

pub fn view<'a, Message: 'a>() -> Element<'a, Message> {
    let intro = text(
        "Contact us today and let's create something extraordinary together! \
         We're excited to collaborate with you",
    )
    .size(15);

    let channels = row![
        text("@gloamingmistake").size(14).width(Length::Fill),
        text("+62 812-3217-9590").size(14).width(Length::Fill),
        text("gloamingmistake@gmail.com").size(14).width(Length::Fill),
    ]
    .spacing(20);

    container(
        container(
            column![
                text("Get In touch").size(44),
                intro,
                horizontal_rule(1),
                channels,
            ]
            .spacing(30),
        )
        .padding(40)
        .max_width(900)
        .style(container::bordered_box),
    )
    .center_x(Length::Fill)
    .center_y(Length::Fill)
    .into()
}
